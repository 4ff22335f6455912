// Suite configuration with environment overrides.

use e2e_session::{Result, WebDriverOptions};
use serde::Deserialize;
use url::Url;

/// Demo application the suites run against by default.
pub const DEFAULT_BASE_URL: &str = "https://the-internet.herokuapp.com";

/// Known-good credentials published by the demo application.
pub const DEFAULT_USERNAME: &str = "tomsmith";
pub const DEFAULT_PASSWORD: &str = "SuperSecretPassword!";

/// Configuration for the live suites.
///
/// Values come from defaults, optionally overridden by `E2E_BASE_URL`,
/// `E2E_WEBDRIVER_URL`, `E2E_USERNAME`, `E2E_PASSWORD` and `E2E_HEADLESS`.
/// The struct also deserializes, for runners that load it from a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub base_url: String,
    pub webdriver_url: String,
    pub username: String,
    pub password: String,
    pub headless: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            headless: true,
        }
    }
}

impl SuiteConfig {
    /// Defaults overridden by any `E2E_*` environment variables that are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("E2E_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = std::env::var("E2E_WEBDRIVER_URL") {
            config.webdriver_url = value;
        }
        if let Ok(value) = std::env::var("E2E_USERNAME") {
            config.username = value;
        }
        if let Ok(value) = std::env::var("E2E_PASSWORD") {
            config.password = value;
        }
        if let Ok(value) = std::env::var("E2E_HEADLESS") {
            config.headless = parse_flag(&value);
        }
        config
    }

    /// The base URL, parsed.
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Connection options for a [`e2e_session::WebDriverSession`].
    pub fn webdriver_options(&self) -> Result<WebDriverOptions> {
        Ok(WebDriverOptions {
            webdriver_url: self.webdriver_url.clone(),
            base_url: self.base_url()?,
            headless: self.headless,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !(value == "0" || value.eq_ignore_ascii_case("false"))
}
