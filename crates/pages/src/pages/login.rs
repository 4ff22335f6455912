// Login form at /login: credential entry, flash outcomes, and logout.

use e2e_session::{Error, Result, Session};

use crate::check::expect;

/// Route of the login form.
pub const LOGIN_ROUTE: &str = "/login";

/// Route of the secure area shown after a successful login.
pub const SECURE_ROUTE: &str = "/secure";

/// Selectors for the login form and its outcome regions.
struct LoginSelectors {
    username: &'static str,
    password: &'static str,
    submit: &'static str,
    flash: &'static str,
    flash_success: &'static str,
    logout: &'static str,
}

const SELECTORS: LoginSelectors = LoginSelectors {
    username: "#username",
    password: "#password",
    submit: "button[type=\"submit\"]",
    flash: "#flash",
    flash_success: ".flash.success",
    logout: ".button.secondary",
};

// Flash phrases the application emits. The flash region also carries a close
// control, so checks look for containment rather than equality.
const LOGIN_SUCCESS: &str = "You logged into a secure area!";
const INVALID_USERNAME: &str = "Your username is invalid!";
const INVALID_PASSWORD: &str = "Your password is invalid!";
const LOGOUT_SUCCESS: &str = "You logged out of the secure area!";

/// Page object for the form-authentication page.
pub struct LoginPage<'a, S: Session + ?Sized> {
    session: &'a S,
}

impl<'a, S: Session + ?Sized> LoginPage<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Loads the login form.
    pub async fn goto(&self) -> Result<()> {
        self.session.navigate(LOGIN_ROUTE).await
    }

    /// Fills the username control. Empty means "field left blank".
    pub async fn fill_username(&self, username: &str) -> Result<()> {
        self.session.fill(SELECTORS.username, username).await
    }

    /// Fills the password control. Empty means "field left blank".
    pub async fn fill_password(&self, password: &str) -> Result<()> {
        self.session.fill(SELECTORS.password, password).await
    }

    /// Submits the form without interpreting the outcome.
    pub async fn submit(&self) -> Result<()> {
        self.session.click(SELECTORS.submit).await
    }

    /// Username first, then password, then submit. The application validates
    /// in that order, which decides the error shown when both are wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.fill_username(username).await?;
        self.fill_password(password).await?;
        self.submit().await
    }

    /// Current flash text, or an empty string when no flash is shown.
    pub async fn flash_text(&self) -> Result<String> {
        match self.session.read_text(SELECTORS.flash).await {
            Ok(text) => Ok(text),
            Err(Error::ElementNotFound(_)) => Ok(String::new()),
            Err(other) => Err(other),
        }
    }

    /// Checks that the flash region is visible and contains `text`.
    pub async fn assert_flash_contains(&self, text: &str) -> Result<()> {
        expect(self.session, SELECTORS.flash).to_be_visible().await?;
        expect(self.session, SELECTORS.flash)
            .to_contain_text(text)
            .await
    }

    /// Checks the success variant: the success flash is visible and carries
    /// the logged-in phrase. Both conditions are required.
    pub async fn assert_login_succeeded(&self) -> Result<()> {
        expect(self.session, SELECTORS.flash_success)
            .to_be_visible()
            .await?;
        self.assert_flash_contains(LOGIN_SUCCESS).await
    }

    /// Checks the failure variant. Without `expected`, the invalid-username
    /// phrase is assumed (the application checks the username first).
    pub async fn assert_login_failed(&self, expected: Option<&str>) -> Result<()> {
        self.assert_flash_contains(expected.unwrap_or(INVALID_USERNAME))
            .await
    }

    /// Checks the failure variant for a bad password on a known username.
    pub async fn assert_login_failed_invalid_password(&self) -> Result<()> {
        self.assert_flash_contains(INVALID_PASSWORD).await
    }

    pub async fn assert_username_empty(&self) -> Result<()> {
        expect(self.session, SELECTORS.username).to_have_value("").await
    }

    pub async fn assert_password_empty(&self) -> Result<()> {
        expect(self.session, SELECTORS.password).to_have_value("").await
    }

    /// Checks the logout control is present, e.g. right after a login.
    pub async fn assert_logout_control_visible(&self) -> Result<()> {
        expect(self.session, SELECTORS.logout).to_be_visible().await
    }

    /// Leaves the secure area.
    pub async fn logout(&self) -> Result<()> {
        self.session.click(SELECTORS.logout).await
    }

    pub async fn assert_logged_out(&self) -> Result<()> {
        self.assert_flash_contains(LOGOUT_SUCCESS).await
    }
}
