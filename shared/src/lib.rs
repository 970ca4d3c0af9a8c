pub mod error;
pub mod models;
pub mod validation;
pub mod wizard;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::*;
pub use wizard::{Effect, Wizard, WizardEvent, WizardState};

#[cfg(test)]
mod tests;
