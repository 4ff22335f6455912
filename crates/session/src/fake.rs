// Scripted in-memory session for exercising page objects without a browser.
//
// The fake models just enough of a document to satisfy the Session surface:
// pages keyed by path, elements with a value, text, attributes and a
// visibility flag, and per-element click rules that mutate the document the
// way the application under test would.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use crate::error::{Error, Result};
use crate::session::Session;

type ClickRule = Box<dyn FnMut(&mut FakeDom) -> Result<()> + Send>;

/// One element on a fake page: an input control, a button, or a text region.
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub value: String,
    pub text: String,
    pub attrs: HashMap<String, String>,
    pub visible: bool,
}

impl FakeElement {
    /// A visible input control with the given `type` attribute.
    pub fn input(input_type: &str) -> Self {
        Self {
            attrs: HashMap::from([("type".to_string(), input_type.to_string())]),
            visible: true,
            ..Self::default()
        }
    }

    /// A visible clickable control.
    pub fn button() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// A visible text region.
    pub fn region(text: &str) -> Self {
        Self {
            text: text.to_string(),
            visible: true,
            ..Self::default()
        }
    }

    /// Same element, hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Default)]
struct FakePage {
    elements: HashMap<String, FakeElement>,
}

/// The scripted document tree plus the current location. Click rules receive
/// a mutable borrow of this to simulate the application's response.
pub struct FakeDom {
    base: Url,
    location: Url,
    pages: HashMap<String, FakePage>,
}

impl FakeDom {
    fn new(base: Url) -> Self {
        Self {
            location: base.clone(),
            base,
            pages: HashMap::new(),
        }
    }

    fn current_page(&self) -> Option<&FakePage> {
        self.pages.get(self.location.path())
    }

    fn current_page_mut(&mut self) -> &mut FakePage {
        let path = self.location.path().to_string();
        self.pages.entry(path).or_default()
    }

    /// Changes the current location, as a navigation or redirect would.
    pub fn goto(&mut self, path: &str) -> Result<()> {
        self.location = self.base.join(path)?;
        Ok(())
    }

    /// The current location.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Current value of a control on the current page, empty when missing.
    pub fn value_of(&self, selector: &str) -> String {
        self.current_page()
            .and_then(|page| page.elements.get(selector))
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    /// Inserts or replaces an element on the current page.
    pub fn place(&mut self, selector: &str, element: FakeElement) {
        self.current_page_mut()
            .elements
            .insert(selector.to_string(), element);
    }

    /// Inserts or replaces an element on the page at `path`.
    pub fn place_on(&mut self, path: &str, selector: &str, element: FakeElement) {
        self.pages
            .entry(path.to_string())
            .or_default()
            .elements
            .insert(selector.to_string(), element);
    }

    /// Overwrites the value of an existing control on the current page.
    pub fn set_value(&mut self, selector: &str, value: &str) -> Result<()> {
        let element = self
            .current_page_mut()
            .elements
            .get_mut(selector)
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))?;
        element.value = value.to_string();
        Ok(())
    }

    /// Removes an element from the current page.
    pub fn remove(&mut self, selector: &str) {
        self.current_page_mut().elements.remove(selector);
    }
}

/// A [`Session`] over a scripted [`FakeDom`].
///
/// Build one with [`FakeSession::new`], lay out pages with [`install`]
/// (keyed by route path), and attach [`on_click`] rules where the real
/// application would react to a submit or a button press. The `delay`
/// primitive sleeps on the tokio clock, so suites can run it against a
/// paused clock and settle delays resolve instantly.
///
/// [`install`]: FakeSession::install
/// [`on_click`]: FakeSession::on_click
pub struct FakeSession {
    dom: Mutex<FakeDom>,
    rules: Mutex<HashMap<(String, String), ClickRule>>,
}

impl FakeSession {
    /// Creates an empty fake whose location starts at `base`.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(Self {
            dom: Mutex::new(FakeDom::new(base)),
            rules: Mutex::new(HashMap::new()),
        })
    }

    /// Places an element on the page at `path`.
    pub fn install(&self, path: &str, selector: &str, element: FakeElement) {
        self.dom.lock().place_on(path, selector, element);
    }

    /// Registers a rule run whenever `selector` is clicked on the page at
    /// `path`.
    pub fn on_click<F>(&self, path: &str, selector: &str, rule: F)
    where
        F: FnMut(&mut FakeDom) -> Result<()> + Send + 'static,
    {
        self.rules
            .lock()
            .insert((path.to_string(), selector.to_string()), Box::new(rule));
    }

    /// Runs `f` against the document, for scripting and inspection from
    /// tests.
    pub fn with_dom<R>(&self, f: impl FnOnce(&mut FakeDom) -> R) -> R {
        f(&mut self.dom.lock())
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn navigate(&self, path: &str) -> Result<()> {
        self.dom.lock().goto(path)
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let mut dom = self.dom.lock();
        let element = dom
            .current_page_mut()
            .elements
            .get_mut(selector)
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))?;
        // Number inputs mirror browser behavior: a fill that does not parse
        // as a number leaves the control cleared.
        let rejected = element.attrs.get("type").is_some_and(|t| t == "number")
            && !value.is_empty()
            && value.parse::<f64>().is_err();
        element.value = if rejected {
            String::new()
        } else {
            value.to_string()
        };
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let path = {
            let dom = self.dom.lock();
            if dom
                .current_page()
                .is_none_or(|page| !page.elements.contains_key(selector))
            {
                return Err(Error::ElementNotFound(selector.to_string()));
            }
            dom.location.path().to_string()
        };
        let mut rules = self.rules.lock();
        if let Some(rule) = rules.get_mut(&(path, selector.to_string())) {
            rule(&mut self.dom.lock())?;
        }
        Ok(())
    }

    async fn read_text(&self, selector: &str) -> Result<String> {
        let dom = self.dom.lock();
        dom.current_page()
            .and_then(|page| page.elements.get(selector))
            .map(|element| element.text.clone())
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    async fn read_value(&self, selector: &str) -> Result<String> {
        let dom = self.dom.lock();
        dom.current_page()
            .and_then(|page| page.elements.get(selector))
            .map(|element| element.value.clone())
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    async fn read_attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let dom = self.dom.lock();
        dom.current_page()
            .and_then(|page| page.elements.get(selector))
            .map(|element| element.attrs.get(name).cloned())
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let dom = self.dom.lock();
        Ok(dom
            .current_page()
            .and_then(|page| page.elements.get(selector))
            .is_some_and(|element| element.visible))
    }

    async fn current_location(&self) -> Result<Url> {
        Ok(self.dom.lock().location.clone())
    }

    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
