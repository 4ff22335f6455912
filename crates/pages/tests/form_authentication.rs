// Scenarios for the form-authentication page.

mod common;

use common::{VALID_PASSWORD, VALID_USERNAME, the_internet};
use e2e_pages::{LoginPage, expect, expect_location};

#[tokio::test]
async fn valid_credentials_reach_the_secure_area() -> anyhow::Result<()> {
    common::init_tracing();
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.login(VALID_USERNAME, VALID_PASSWORD).await?;
    login.assert_login_succeeded().await?;

    expect_location(&session).to_have_path("/secure").await?;
    login.assert_logout_control_visible().await?;
    Ok(())
}

#[tokio::test]
async fn invalid_username_shows_the_default_error() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.login("invaliduser", VALID_PASSWORD).await?;
    login.assert_login_failed(None).await?;

    // no navigation happened
    expect_location(&session).to_match(r".*/login.*").await?;
    Ok(())
}

#[tokio::test]
async fn invalid_password_shows_the_password_error() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.login(VALID_USERNAME, "wrongpassword").await?;
    login.assert_login_failed_invalid_password().await?;
    Ok(())
}

#[tokio::test]
async fn empty_username_fails_with_the_username_error() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.fill_username("").await?;
    login.fill_password(VALID_PASSWORD).await?;
    login.submit().await?;

    login.assert_username_empty().await?;
    login.assert_login_failed(None).await?;
    Ok(())
}

#[tokio::test]
async fn empty_password_fails_with_the_password_error() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.fill_username(VALID_USERNAME).await?;
    login.fill_password("").await?;
    login.submit().await?;

    login.assert_password_empty().await?;
    login.assert_login_failed_invalid_password().await?;
    Ok(())
}

#[tokio::test]
async fn both_fields_empty_fails_with_the_username_error() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.submit().await?;

    login.assert_username_empty().await?;
    login.assert_password_empty().await?;
    login.assert_login_failed(None).await?;
    Ok(())
}

#[tokio::test]
async fn no_flash_is_shown_before_the_first_submit() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    assert_eq!(login.flash_text().await?, "");
    expect(&session, "#flash").not().to_be_visible().await?;
    Ok(())
}

#[tokio::test]
async fn username_field_round_trips_input() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.fill_username("testuser123").await?;
    expect(&session, "#username").to_have_value("testuser123").await?;
    Ok(())
}

#[tokio::test]
async fn password_field_is_masked_and_round_trips_input() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.fill_password("mypassword123").await?;

    expect(&session, "#password")
        .to_have_attribute("type", "password")
        .await?;
    expect(&session, "#password").to_have_value("mypassword123").await?;
    Ok(())
}

#[tokio::test]
async fn full_login_and_logout_flow_ends_back_on_the_form() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.login(VALID_USERNAME, VALID_PASSWORD).await?;
    login.assert_login_succeeded().await?;

    login.logout().await?;
    login.assert_logged_out().await?;
    expect_location(&session).to_match(r".*/login.*").await?;
    Ok(())
}

#[tokio::test]
async fn special_characters_survive_the_password_field() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);
    let special = "!@#$%^&*()_+-=[]{}|;:,.<>?";

    login.goto().await?;
    login.fill_password(special).await?;
    expect(&session, "#password").to_have_value(special).await?;
    Ok(())
}

#[tokio::test]
async fn long_usernames_survive_the_username_field() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);
    let long = "a".repeat(100);

    login.goto().await?;
    login.fill_username(&long).await?;
    expect(&session, "#username").to_have_value(&long).await?;
    Ok(())
}

#[tokio::test]
async fn clearing_the_username_is_idempotent() -> anyhow::Result<()> {
    let session = the_internet();
    let login = LoginPage::new(&session);

    login.goto().await?;
    login.fill_username("").await?;
    login.assert_username_empty().await?;
    login.fill_username("").await?;
    login.assert_username_empty().await?;
    Ok(())
}
