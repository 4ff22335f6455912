// Inputs showcase at /inputs: typed controls for boundary-value checks.

use e2e_session::{Result, Session};

use crate::check::expect;

/// Route of the input-type showcase page.
pub const INPUTS_ROUTE: &str = "/inputs";

/// The page's number-typed control.
pub const NUMBER_INPUT: &str = "input[type=\"number\"]";

/// Page object for the input-type showcase page.
pub struct InputsPage<'a, S: Session + ?Sized> {
    session: &'a S,
}

impl<'a, S: Session + ?Sized> InputsPage<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Loads the showcase page.
    pub async fn goto(&self) -> Result<()> {
        self.session.navigate(INPUTS_ROUTE).await
    }

    /// Writes a string into the number control; no local coercion.
    pub async fn fill_number(&self, value: &str) -> Result<()> {
        self.session.fill(NUMBER_INPUT, value).await
    }

    /// Fills the number control with a non-numeric string and checks the
    /// outcome. Browsers differ between rejecting the keystrokes and
    /// silently clearing, so the value must either be empty or parse as a
    /// number. The tolerance is deliberate; do not tighten it.
    pub async fn assert_number_input_tolerates_garbage(&self) -> Result<()> {
        self.fill_number("abc").await?;
        expect(self.session, NUMBER_INPUT)
            .to_have_value_satisfying("empty or numeric", |value| {
                value.is_empty() || value.parse::<f64>().is_ok()
            })
            .await
    }

    /// Exact-match check on an arbitrary control's value.
    pub async fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        expect(self.session, selector).to_have_value(expected).await
    }

    /// Exact-match check on an arbitrary control's declared type attribute.
    pub async fn assert_type(&self, selector: &str, expected_type: &str) -> Result<()> {
        expect(self.session, selector)
            .to_have_attribute("type", expected_type)
            .await
    }
}
