// bakery/src/flow/execution.rs

use tracing::{event, instrument, span, Instrument, Level};

use super::control::{FlowOutcome, StepControl};
use super::definition::{Flow, Phase};
use crate::error::StoreError;
use crate::shared::Shared;

impl<T, E> Flow<T, E>
where
  T: 'static + Send + Sync,
  E: std::error::Error + From<StoreError> + Send + Sync + 'static,
{
  /// Runs every step in order against `state`.
  ///
  /// A skipped step (its `skip_if` holds) and an optional step without
  /// handlers are passed over. A required step without handlers fails with
  /// `StoreError::HandlerMissing`. The first handler error ends the run.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(
      flow_state_type = %std::any::type_name::<T>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, state: Shared<T>) -> Result<FlowOutcome, E> {
    event!(Level::DEBUG, "Flow starting.");

    for (step_index, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "flow_step",
        step_name = step.name.as_str(),
        step_index,
        optional = step.optional
      );

      if let Some(skip_if) = &step.skip_if {
        if skip_if(&*state.read()) {
          step_span.in_scope(|| event!(Level::INFO, "Step skipped by its condition."));
          continue;
        }
      }

      let has_handlers = Phase::ORDER
        .iter()
        .any(|phase| !self.handlers_for(&step.name, *phase).is_empty());
      if !has_handlers {
        if step.optional {
          step_span.in_scope(|| event!(Level::DEBUG, "Optional step has no handlers, skipping."));
          continue;
        }
        step_span.in_scope(|| event!(Level::ERROR, "Required step has no handlers."));
        return Err(E::from(StoreError::HandlerMissing {
          step_name: step.name.clone(),
        }));
      }

      for phase in Phase::ORDER {
        let control = self
          .run_phase(&step.name, phase, &state)
          .instrument(step_span.clone())
          .await?;
        if control == StepControl::Stop {
          return Ok(FlowOutcome::Stopped);
        }
      }
    }

    event!(Level::DEBUG, "Flow completed.");
    Ok(FlowOutcome::Completed)
  }

  async fn run_phase(&self, step_name: &str, phase: Phase, state: &Shared<T>) -> Result<StepControl, E> {
    for (handler_index, handler) in self.handlers_for(step_name, phase).iter().enumerate() {
      let outcome = handler(state.clone())
        .instrument(span!(Level::DEBUG, "flow_handler", phase = phase.label(), handler_index))
        .await;
      match outcome {
        Ok(StepControl::Continue) => {}
        Ok(StepControl::Stop) => {
          event!(Level::INFO, phase = phase.label(), "Flow stopped by a handler.");
          return Ok(StepControl::Stop);
        }
        Err(e) => {
          event!(Level::ERROR, phase = phase.label(), error = %e, "Handler failed.");
          return Err(e);
        }
      }
    }
    Ok(StepControl::Continue)
  }
}
