// WebDriver-backed session over fantoccini.
//
// Selectors are CSS. Relative routes are joined against the base URL so page
// objects can speak in routes ("/login") rather than absolute URLs.

use std::time::Duration;

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::session::Session;

/// Options for establishing a WebDriver session.
#[derive(Debug, Clone)]
pub struct WebDriverOptions {
    /// WebDriver endpoint, e.g. `http://localhost:4444` (geckodriver) or
    /// `http://localhost:9515` (chromedriver).
    pub webdriver_url: String,
    /// Base URL of the application under test.
    pub base_url: Url,
    /// Launch the browser without a visible window.
    pub headless: bool,
}

/// A [`Session`] backed by a real browser behind a WebDriver endpoint.
pub struct WebDriverSession {
    client: Client,
    base_url: Url,
}

impl WebDriverSession {
    /// Establishes a new browser session.
    pub async fn connect(options: &WebDriverOptions) -> Result<Self> {
        info!("Connecting to WebDriver at {}", options.webdriver_url);

        let mut caps = serde_json::map::Map::new();
        if options.headless {
            // Both vendor capability blocks are sent; the driver ignores the
            // one that is not its own.
            caps.insert(
                "moz:firefoxOptions".to_string(),
                json!({ "args": ["-headless"] }),
            );
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new"] }),
            );
        }

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&options.webdriver_url)
            .await
            .map_err(|e| Error::Connect {
                url: options.webdriver_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: options.base_url.clone(),
        })
    }

    /// Ends the browser session. Dropping a session without closing it leaves
    /// the window alive until the driver reaps it.
    pub async fn close(self) -> Result<()> {
        self.client.close().await.map_err(cmd)
    }

    async fn find(&self, selector: &str) -> Result<Element> {
        debug!(selector, "Locating element");
        self.client
            .find(Locator::Css(selector))
            .await
            .map_err(|e| match e {
                e if e.is_no_such_element() => Error::ElementNotFound(selector.to_string()),
                other => cmd(other),
            })
    }
}

fn cmd(e: CmdError) -> Error {
    Error::Backend(e.to_string())
}

#[async_trait]
impl Session for WebDriverSession {
    async fn navigate(&self, path: &str) -> Result<()> {
        let url = self.base_url.join(path)?;
        info!(%url, "Navigating");
        self.client
            .goto(url.as_str())
            .await
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let element = self.find(selector).await?;
        element.clear().await.map_err(cmd)?;
        if !value.is_empty() {
            element.send_keys(value).await.map_err(cmd)?;
        }
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        debug!(selector, "Clicking element");
        self.find(selector).await?.click().await.map_err(cmd)
    }

    async fn read_text(&self, selector: &str) -> Result<String> {
        self.find(selector).await?.text().await.map_err(cmd)
    }

    async fn read_value(&self, selector: &str) -> Result<String> {
        let value = self.find(selector).await?.prop("value").await.map_err(cmd)?;
        Ok(value.unwrap_or_default())
    }

    async fn read_attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.find(selector).await?.attr(name).await.map_err(cmd)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        match self.find(selector).await {
            Ok(element) => element.is_displayed().await.map_err(cmd),
            Err(Error::ElementNotFound(_)) => Ok(false),
            Err(other) => Err(other),
        }
    }

    async fn current_location(&self) -> Result<Url> {
        self.client.current_url().await.map_err(cmd)
    }

    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
