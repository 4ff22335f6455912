//! e2e-pages: page objects for the-internet demo application.
//!
//! Each page object wraps one page's selectors and interaction sequences and
//! borrows the scenario's [`Session`]. Assertion helpers poll through the
//! [`expect`] facility and fail the scenario with an error instead of
//! panicking, so independent scenarios are unaffected.
//!
//! # Example
//!
//! ```ignore
//! use e2e_pages::{LoginPage, SuiteConfig, expect_location};
//! use e2e_session::WebDriverSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SuiteConfig::from_env();
//!     let session = WebDriverSession::connect(&config.webdriver_options()?).await?;
//!
//!     let login = LoginPage::new(&session);
//!     login.goto().await?;
//!     login.login(&config.username, &config.password).await?;
//!     login.assert_login_succeeded().await?;
//!     expect_location(&session).to_have_path("/secure").await?;
//!
//!     login.logout().await?;
//!     login.assert_logged_out().await?;
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

mod check;
pub mod config;
pub mod pages;

pub use check::{Expectation, LocationExpectation, expect, expect_location};
pub use config::SuiteConfig;
pub use pages::{ForgotPasswordPage, InputsPage, LoginPage};

// Re-export the session surface so suites depend on one crate.
pub use e2e_session::{Error, Result, Session};
