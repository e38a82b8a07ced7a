// bakery/src/flow/hooks.rs

//! Registration of `before`, `on` and `after` handlers.

use std::future::Future;

use super::control::StepControl;
use super::definition::{Flow, Phase};
use super::step::Handler;
use crate::error::StoreError;
use crate::shared::Shared;

impl<T, E> Flow<T, E>
where
  T: 'static + Send + Sync,
  E: std::error::Error + From<StoreError> + Send + Sync + 'static,
{
  /// Runs ahead of the step's `on` handlers.
  pub fn before<F, HandlerErr>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<E> + Send + Sync + 'static,
  {
    self.push(step_name, Phase::Before, handler_fn);
  }

  /// The step's main work.
  pub fn on<F, HandlerErr>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<E> + Send + Sync + 'static,
  {
    self.push(step_name, Phase::On, handler_fn);
  }

  /// Runs once the step's `on` handlers have finished.
  pub fn after<F, HandlerErr>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<E> + Send + Sync + 'static,
  {
    self.push(step_name, Phase::After, handler_fn);
  }

  /// Registers an already boxed handler (see [`Handler`]).
  pub fn on_boxed(&mut self, step_name: &str, handler: Handler<T, E>) {
    self.ensure_step_exists(step_name);
    self
      .handlers
      .entry((step_name.to_string(), Phase::On))
      .or_default()
      .push(handler);
  }

  fn push<F, HandlerErr>(
    &mut self,
    step_name: &str,
    phase: Phase,
    handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<E> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let handler: Handler<T, E> = Box::new(move |state| {
      let fut = handler_fn(state);
      Box::pin(async move { fut.await.map_err(Into::into) })
    });
    self
      .handlers
      .entry((step_name.to_string(), phase))
      .or_default()
      .push(handler);
  }
}
