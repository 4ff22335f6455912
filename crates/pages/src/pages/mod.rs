// Page objects for the-internet demo application.
//
// Each page object borrows the scenario's session and wraps one page's
// selectors and interaction sequences. Components never call each other, and
// none of them keeps state of its own: everything lives in the session.

mod forgot_password;
mod inputs;
mod login;

pub use forgot_password::{FORGOT_PASSWORD_ROUTE, ForgotPasswordPage};
pub use inputs::{INPUTS_ROUTE, InputsPage, NUMBER_INPUT};
pub use login::{LOGIN_ROUTE, LoginPage, SECURE_ROUTE};
