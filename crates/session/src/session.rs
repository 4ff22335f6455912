// The session trait: the browser primitives page objects are allowed to use.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

/// One live browser instance (or a scripted stand-in) owned by a single test
/// scenario.
///
/// Every operation is an await point, and operations on one session must be
/// issued sequentially: later steps depend on the visible effect of earlier
/// ones. The trait does no retrying and no error recovery; failures propagate
/// to the scenario that issued the call.
#[async_trait]
pub trait Session: Send + Sync {
    /// Loads `path`, joined against the session's base URL when relative.
    async fn navigate(&self, path: &str) -> Result<()>;

    /// Replaces the current value of the control matched by `selector`.
    ///
    /// An empty `value` clears the control; no validation is performed here.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Clicks the first element matched by `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Text content of the first element matched by `selector`.
    ///
    /// Fails with [`Error::ElementNotFound`](crate::Error::ElementNotFound)
    /// when nothing matches.
    async fn read_text(&self, selector: &str) -> Result<String>;

    /// Current value of the control matched by `selector`.
    async fn read_value(&self, selector: &str) -> Result<String>;

    /// Declared attribute of the matched element, or `None` when the
    /// attribute is absent.
    async fn read_attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Whether the matched element is displayed. A missing element is
    /// reported as not visible rather than as an error.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// The session's current location.
    async fn current_location(&self) -> Result<Url>;

    /// Suspends the scenario for `duration`. Scripted sessions may resolve
    /// this against a virtual clock.
    async fn delay(&self, duration: Duration);
}
