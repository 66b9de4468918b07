//! Custom extractors.

mod form;
mod session;

pub use form::FormInput;
pub use session::CurrentSession;
