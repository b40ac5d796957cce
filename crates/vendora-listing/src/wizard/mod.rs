//! Wizard controller module.
//!
//! Contains the step enumeration, the per-step validation predicates,
//! and the session controller.

mod flow;
mod step;
mod validate;

pub use flow::ListingWizard;
pub use step::WizardStep;
pub use validate::{is_step_valid, missing_for_step};
