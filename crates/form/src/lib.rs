//! School registration form controller and its collaborator seams.
//!
//! [`FormController`] owns the draft, the per-field violations, and the
//! single in-flight submission flag. Storage, notifications, navigation,
//! and image upload are injected behind traits so the unit is testable in
//! isolation.

pub mod controller;
pub mod nav;
pub mod notify;
pub mod preview;
pub mod upload;

pub use controller::{FormController, SubmitOutcome};
pub use nav::Navigator;
pub use notify::Notifier;
