//! Form validation engine.
//!
//! Provides violation/report types and a pure-logic evaluator over a
//! [`SchoolDraft`](crate::school::SchoolDraft), with no I/O and no shared
//! state.

pub mod evaluator;
pub mod rules;
