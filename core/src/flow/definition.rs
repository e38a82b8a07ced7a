// bakery/src/flow/definition.rs

use std::collections::HashMap;

use super::step::{Handler, SkipCondition, StepDef};
use crate::error::StoreError;

/// Which hook list of a step a handler belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Phase {
  Before,
  On,
  After,
}

impl Phase {
  pub(crate) const ORDER: [Phase; 3] = [Phase::Before, Phase::On, Phase::After];

  pub(crate) fn label(self) -> &'static str {
    match self {
      Phase::Before => "before",
      Phase::On => "on",
      Phase::After => "after",
    }
  }
}

/// An ordered list of named steps over shared state `T`, each with
/// `before`/`on`/`after` handlers returning `Result<StepControl, E>`.
///
/// `E` must absorb `StoreError` so that flow misconfiguration (a required
/// step with no handler) surfaces through the same error type.
pub struct Flow<T, E>
where
  T: 'static + Send + Sync,
  E: std::error::Error + From<StoreError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<T>>,
  pub(crate) handlers: HashMap<(String, Phase), Vec<Handler<T, E>>>,
}

impl<T, E> Flow<T, E>
where
  T: 'static + Send + Sync,
  E: std::error::Error + From<StoreError> + Send + Sync + 'static,
{
  /// Declares the steps as `(name, optional, skip_if)` in run order.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<T>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_if)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_if.clone(),
      })
      .collect();
    Self {
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Panics on an unknown step name: that is a wiring mistake, not a runtime
  /// condition.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Flow setup error: step '{}' is not declared.", step_name);
    }
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) {
    let name: String = new_step_name.into();
    let Some(idx) = self.steps.iter().position(|s| s.name == existing_step_name) else {
      panic!("Flow setup error: step '{}' is not declared.", existing_step_name);
    };
    if self.steps.iter().any(|s| s.name == name) {
      panic!("Flow setup error: step '{}' is already declared.", name);
    }
    self.steps.insert(idx + 1, StepDef { name, optional, skip_if });
  }

  /// Removes a step and its handlers; unknown names are ignored.
  pub fn remove_step(&mut self, step_name: &str) {
    self.steps.retain(|s| s.name != step_name);
    self.handlers.retain(|(name, _), _| name != step_name);
  }

  pub(crate) fn handlers_for(&self, step_name: &str, phase: Phase) -> &[Handler<T, E>] {
    self
      .handlers
      .get(&(step_name.to_string(), phase))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }
}
