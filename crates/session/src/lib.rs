//! e2e-session: the browser-session surface consumed by page objects.
//!
//! A [`Session`] is one live browser instance (or a scripted stand-in) owned
//! by a single test scenario. Page objects borrow a session and speak to it
//! through a small set of primitives: navigate, fill, click, read text/value/
//! attribute, visibility, current location, and a delay.
//!
//! Two implementations ship with the crate:
//!
//! - [`WebDriverSession`] drives a real browser through a WebDriver endpoint
//!   (geckodriver, chromedriver).
//! - [`fake::FakeSession`] is a scripted in-memory document used by the page
//!   suites so they run without a browser.
//!
//! # Example
//!
//! ```ignore
//! use e2e_session::{Session, WebDriverOptions, WebDriverSession};
//!
//! #[tokio::main]
//! async fn main() -> e2e_session::Result<()> {
//!     let session = WebDriverSession::connect(&WebDriverOptions {
//!         webdriver_url: "http://localhost:4444".into(),
//!         base_url: url::Url::parse("https://the-internet.herokuapp.com").unwrap(),
//!         headless: true,
//!     })
//!     .await?;
//!
//!     session.navigate("/login").await?;
//!     session.fill("#username", "tomsmith").await?;
//!     session.close().await
//! }
//! ```

mod error;
pub mod fake;
mod session;
mod webdriver;

pub use error::{Error, Result};
pub use session::Session;
pub use webdriver::{WebDriverOptions, WebDriverSession};
