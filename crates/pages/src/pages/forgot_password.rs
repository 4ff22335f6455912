// Forgot-password form at /forgot_password: one required email field.

use std::time::Duration;

use e2e_session::{Error, Result, Session};
use tracing::debug;

use crate::check::{expect, expect_location};

/// Route of the recovery form.
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot_password";

// How long a submission gets to settle before the weak acceptance check
// looks at the location.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

struct FormSelectors {
    email: &'static str,
    submit: &'static str,
    error: &'static str,
}

const SELECTORS: FormSelectors = FormSelectors {
    email: "#email",
    submit: "button[type=\"submit\"]",
    error: ".error",
};

/// Page object for the forgot-password form.
pub struct ForgotPasswordPage<'a, S: Session + ?Sized> {
    session: &'a S,
}

impl<'a, S: Session + ?Sized> ForgotPasswordPage<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Loads the recovery form.
    pub async fn goto(&self) -> Result<()> {
        self.session.navigate(FORGOT_PASSWORD_ROUTE).await
    }

    /// Fills the email control. No format validation happens here.
    pub async fn fill_email(&self, email: &str) -> Result<()> {
        self.session.fill(SELECTORS.email, email).await
    }

    /// Current value of the email control.
    pub async fn email_value(&self) -> Result<String> {
        self.session.read_value(SELECTORS.email).await
    }

    /// Submits the form.
    pub async fn submit(&self) -> Result<()> {
        self.session.click(SELECTORS.submit).await
    }

    /// Fills the form; submitting stays the caller's decision.
    pub async fn fill(&self, email: &str) -> Result<()> {
        self.fill_email(email).await
    }

    /// Checks the error region is visible, and contains `expected` if given.
    pub async fn assert_error_visible(&self, expected: Option<&str>) -> Result<()> {
        expect(self.session, SELECTORS.error).to_be_visible().await?;
        if let Some(text) = expected {
            expect(self.session, SELECTORS.error)
                .to_contain_text(text)
                .await?;
        }
        Ok(())
    }

    pub async fn assert_email_empty(&self) -> Result<()> {
        expect(self.session, SELECTORS.email).to_have_value("").await
    }

    pub async fn assert_email_equals(&self, expected: &str) -> Result<()> {
        expect(self.session, SELECTORS.email)
            .to_have_value(expected)
            .await
    }

    /// Checks the email control declares an accepted input type.
    ///
    /// HTML5 type enforcement differs across browsers, so `email` and
    /// `text` are both accepted, and a missing attribute counts as `text`.
    /// The tolerance is deliberate; do not tighten it.
    pub async fn assert_email_input_type_valid(&self) -> Result<()> {
        expect(self.session, SELECTORS.email).to_be_visible().await?;
        expect(self.session, SELECTORS.email)
            .to_have_attribute_satisfying("type", "'email' or 'text'", |value| {
                matches!(value.unwrap_or("text"), "email" | "text")
            })
            .await
    }

    /// Checks that no navigation happened, confirming a blocked submission.
    pub async fn assert_still_on_form(&self) -> Result<()> {
        expect_location(self.session)
            .to_match(r".*/forgot_password.*")
            .await
    }

    /// Best-effort acceptance check: the email was filled, and after a short
    /// settle delay the session still resolves a location. The application's
    /// post-submit behavior is not contractually fixed (it may redirect or
    /// stay on the form), so nothing stronger is asserted.
    pub async fn assert_submission_accepted(&self) -> Result<()> {
        let email = self.email_value().await?;
        if email.is_empty() {
            return Err(Error::AssertionTimeout(
                "Expected a submitted email, but the field is empty".to_string(),
            ));
        }
        self.session.delay(SETTLE_DELAY).await;
        let location = self.session.current_location().await?;
        debug!(%location, "form settled after submission");
        Ok(())
    }
}
