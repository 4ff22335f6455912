#![allow(dead_code)] // each suite uses its own slice of this module

// Shared test support: a scripted model of the-internet demo application.

use e2e_session::fake::{FakeElement, FakeSession};

pub const VALID_USERNAME: &str = "tomsmith";
pub const VALID_PASSWORD: &str = "SuperSecretPassword!";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a fake session scripted to behave like the demo application's
/// login, forgot-password, and inputs pages: same routes, selectors, flash
/// phrases, and validation order (username is checked before password).
pub fn the_internet() -> FakeSession {
    let session = FakeSession::new("https://the-internet.fake").expect("base url");

    // /login
    session.install("/login", "#username", FakeElement::input("text"));
    session.install("/login", "#password", FakeElement::input("password"));
    session.install("/login", "button[type=\"submit\"]", FakeElement::button());
    session.on_click("/login", "button[type=\"submit\"]", |dom| {
        let username = dom.value_of("#username");
        let password = dom.value_of("#password");
        if username != VALID_USERNAME {
            // the application re-renders the form, so the fields come back empty
            dom.set_value("#username", "")?;
            dom.set_value("#password", "")?;
            dom.place("#flash", FakeElement::region("Your username is invalid!\n×"));
        } else if password != VALID_PASSWORD {
            dom.set_value("#username", "")?;
            dom.set_value("#password", "")?;
            dom.place("#flash", FakeElement::region("Your password is invalid!\n×"));
        } else {
            dom.goto("/secure")?;
            dom.place(
                "#flash",
                FakeElement::region("You logged into a secure area!\n×"),
            );
            dom.place(
                ".flash.success",
                FakeElement::region("You logged into a secure area!\n×"),
            );
            dom.place(".button.secondary", FakeElement::button());
        }
        Ok(())
    });
    session.on_click("/secure", ".button.secondary", |dom| {
        dom.goto("/login")?;
        dom.set_value("#username", "")?;
        dom.set_value("#password", "")?;
        dom.place(
            "#flash",
            FakeElement::region("You logged out of the secure area!\n×"),
        );
        Ok(())
    });

    // /forgot_password
    session.install("/forgot_password", "#email", FakeElement::input("email"));
    session.install(
        "/forgot_password",
        "button[type=\"submit\"]",
        FakeElement::button(),
    );
    session.on_click("/forgot_password", "button[type=\"submit\"]", |dom| {
        // the post-submit behavior of the real application is not fixed; the
        // model stays on the form and shows a confirmation region
        if !dom.value_of("#email").is_empty() {
            dom.place("#content", FakeElement::region("Your e-mail's been sent!"));
        }
        Ok(())
    });

    // /inputs
    session.install("/inputs", "input[type=\"number\"]", FakeElement::input("number"));

    session
}
