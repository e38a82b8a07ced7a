// bakery/src/flow/mod.rs

//! A small step runner: named steps, run in order, each with async
//! `before`/`on`/`after` handlers over a [`Shared`](crate::shared::Shared)
//! state. The checkout is built on it.

pub mod control;
pub mod definition;
pub mod execution;
pub mod hooks;
pub mod step;

pub use control::{FlowOutcome, StepControl};
pub use definition::Flow;
pub use step::{Handler, SkipCondition, StepDef};
