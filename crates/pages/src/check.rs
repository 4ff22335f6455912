// Auto-retry assertions over a Session.
//
// Provides an expect() API in the style of Playwright's test assertions:
// predicates poll until they pass or the timeout elapses, and a failed
// assertion surfaces as Error::AssertionTimeout carrying the last observed
// state. Polling sleeps through the session's delay primitive, so scripted
// sessions resolve it against the tokio clock.

use std::time::Duration;

use e2e_session::{Error, Result, Session};
use tokio::time::Instant;

/// Default timeout for assertions (5 seconds).
const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms).
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates an expectation for the element matched by `selector`.
///
/// Assertions retry until they pass or time out (default: 5 seconds).
pub fn expect<'a, S: Session + ?Sized>(session: &'a S, selector: &'a str) -> Expectation<'a, S> {
    Expectation {
        session,
        selector,
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
        negate: false,
    }
}

/// Creates an expectation for the session's current location.
pub fn expect_location<S: Session + ?Sized>(session: &S) -> LocationExpectation<'_, S> {
    LocationExpectation {
        session,
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    }
}

/// Wraps a selector and provides assertion methods with auto-retry.
pub struct Expectation<'a, S: ?Sized> {
    session: &'a S,
    selector: &'a str,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, matching the chained expect() style.
#[allow(clippy::wrong_self_convention)]
impl<S: Session + ?Sized> Expectation<'_, S> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the element is visible. A missing element counts as not
    /// visible.
    pub async fn to_be_visible(self) -> Result<()> {
        let start = Instant::now();
        loop {
            let visible = self.session.is_visible(self.selector).await?;
            if visible != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let expected = if self.negate { "NOT to be visible" } else { "to be visible" };
                return Err(Error::AssertionTimeout(format!(
                    "Expected element '{}' {expected}, but it was not after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts that the element's text equals `expected` (trimmed).
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let expected = expected.trim();
        let start = Instant::now();
        loop {
            let actual_text = self.session.read_text(self.selector).await?;
            let actual = actual_text.trim();
            if (actual == expected) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let wanted = if self.negate { "NOT to have" } else { "to have" };
                return Err(Error::AssertionTimeout(format!(
                    "Expected element '{}' {wanted} text '{expected}', but had '{actual}' after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts that the element's text contains `expected`.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let actual_text = self.session.read_text(self.selector).await?;
            let actual = actual_text.trim();
            if actual.contains(expected) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let wanted = if self.negate { "NOT to contain" } else { "to contain" };
                return Err(Error::AssertionTimeout(format!(
                    "Expected element '{}' {wanted} text '{expected}', but had '{actual}' after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts that the input control has exactly the value `expected`.
    pub async fn to_have_value(self, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let actual = self.session.read_value(self.selector).await?;
            if (actual == expected) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let wanted = if self.negate { "NOT to have" } else { "to have" };
                return Err(Error::AssertionTimeout(format!(
                    "Expected input '{}' {wanted} value '{expected}', but had '{actual}' after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts on the control's value with a caller-supplied predicate.
    ///
    /// `description` names the accepted shape in the failure message. Used
    /// for checks that must stay tolerant of cross-browser differences.
    pub async fn to_have_value_satisfying<P>(self, description: &str, predicate: P) -> Result<()>
    where
        P: Fn(&str) -> bool,
    {
        let start = Instant::now();
        loop {
            let actual = self.session.read_value(self.selector).await?;
            if predicate(&actual) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "Expected input '{}' to have a value that is {description}, but had '{actual}' after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts that the element declares attribute `name` with exactly the
    /// value `expected`.
    pub async fn to_have_attribute(self, name: &str, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let actual = self.session.read_attribute(self.selector, name).await?;
            if (actual.as_deref() == Some(expected)) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let wanted = if self.negate { "NOT to have" } else { "to have" };
                return Err(Error::AssertionTimeout(format!(
                    "Expected element '{}' {wanted} attribute {name}='{expected}', but had {actual:?} after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts on the raw attribute with a caller-supplied predicate; `None`
    /// means the attribute is absent.
    pub async fn to_have_attribute_satisfying<P>(
        self,
        name: &str,
        description: &str,
        predicate: P,
    ) -> Result<()>
    where
        P: Fn(Option<&str>) -> bool,
    {
        let start = Instant::now();
        loop {
            let actual = self.session.read_attribute(self.selector, name).await?;
            if predicate(actual.as_deref()) != self.negate {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "Expected element '{}' to have attribute '{name}' that is {description}, but had {actual:?} after {:?}",
                    self.selector, self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }
}

/// Wraps the session's location and provides assertion methods with
/// auto-retry.
pub struct LocationExpectation<'a, S: ?Sized> {
    session: &'a S,
    timeout: Duration,
    poll_interval: Duration,
}

#[allow(clippy::wrong_self_convention)]
impl<S: Session + ?Sized> LocationExpectation<'_, S> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Asserts that the current URL matches the regex `pattern`.
    pub async fn to_match(self, pattern: &str) -> Result<()> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("Invalid pattern: {e}")))?;
        let start = Instant::now();
        loop {
            let location = self.session.current_location().await?;
            if re.is_match(location.as_str()) {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "Expected location to match '{pattern}', but was '{location}' after {:?}",
                    self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }

    /// Asserts that the current URL's path equals `path` exactly.
    pub async fn to_have_path(self, path: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let location = self.session.current_location().await?;
            if location.path() == path {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "Expected location path '{path}', but was '{location}' after {:?}",
                    self.timeout
                )));
            }
            self.session.delay(self.poll_interval).await;
        }
    }
}
