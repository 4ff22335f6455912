// Scenarios for the input-type showcase page.

mod common;

use std::time::Duration;

use common::the_internet;
use e2e_pages::InputsPage;
use e2e_pages::pages::NUMBER_INPUT;

#[tokio::test]
async fn number_control_declares_its_type() -> anyhow::Result<()> {
    common::init_tracing();
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.assert_type(NUMBER_INPUT, "number").await?;
    Ok(())
}

#[tokio::test]
async fn numeric_values_round_trip() -> anyhow::Result<()> {
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.fill_number("12345").await?;
    inputs.assert_value(NUMBER_INPUT, "12345").await?;
    Ok(())
}

#[tokio::test]
async fn decimal_values_round_trip() -> anyhow::Result<()> {
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.fill_number("123.45").await?;
    inputs.assert_value(NUMBER_INPUT, "123.45").await?;
    Ok(())
}

#[tokio::test]
async fn negative_values_round_trip_exactly() -> anyhow::Result<()> {
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.fill_number("-100").await?;
    inputs.assert_value(NUMBER_INPUT, "-100").await?;
    Ok(())
}

#[tokio::test]
async fn garbage_fills_are_tolerated() -> anyhow::Result<()> {
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.assert_number_input_tolerates_garbage().await?;
    Ok(())
}

#[tokio::test]
async fn type_attribute_is_stable_across_fills() -> anyhow::Result<()> {
    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.fill_number("42").await?;
    inputs.assert_type(NUMBER_INPUT, "number").await?;
    inputs.fill_number("-7").await?;
    inputs.assert_type(NUMBER_INPUT, "number").await?;
    Ok(())
}

#[tokio::test]
async fn wrong_value_assertion_fails_the_scenario() -> anyhow::Result<()> {
    use e2e_pages::{Error, expect};

    let session = the_internet();
    let inputs = InputsPage::new(&session);

    inputs.goto().await?;
    inputs.fill_number("7").await?;
    let err = expect(&session, NUMBER_INPUT)
        .with_timeout(Duration::ZERO)
        .to_have_value("8")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AssertionTimeout(_)));
    Ok(())
}
