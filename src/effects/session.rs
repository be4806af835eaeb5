//! A calculator session: the imperative shell around `core::handle`.
//!
//! The session owns the one mutable calculator state, loads its evaluator
//! before taking input, turns evaluation failures into a visible error
//! display, and keeps the tape.

use crate::config::CalculatorConfig;
use crate::core::{handle, CalculatorState, EvalError, Event, State, Tape, TapeEntry};
use crate::effects::lifecycle::Lifecycle;
use crate::effects::loader::{self, EvaluatorLoader, EvaluatorRegistry, LoadError, SharedEvaluator};
use std::fmt;
use stillwater::effect::Effect;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors a session reports to its caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Calculator is not accepting input (lifecycle: {lifecycle})")]
    NotReady { lifecycle: Lifecycle },

    #[error("Calculator was already started (lifecycle: {lifecycle})")]
    AlreadyStarted { lifecycle: Lifecycle },

    #[error("Evaluator failed to load: {0}")]
    Load(#[from] LoadError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvalError),

    #[error("Rejected input: {0}")]
    Input(#[from] crate::core::InputError),
}

/// One calculator, from startup to shutdown.
///
/// Events are handled one at a time through `&mut self`, so a press can
/// never interleave with another press or with loading.
pub struct Calculator {
    config: CalculatorConfig,
    lifecycle: Lifecycle,
    evaluator: Option<SharedEvaluator>,
    state: CalculatorState,
    display: String,
    tape: Tape,
}

impl Calculator {
    /// Create an uninitialized session. Input is rejected until `start`
    /// succeeds.
    pub fn new(config: CalculatorConfig) -> Self {
        let tape = Tape::with_capacity(config.tape_capacity);
        let state = CalculatorState::new();
        let display = state.current_input().to_string();
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
            evaluator: None,
            state,
            display,
            tape,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Text currently shown to the user.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Run `loader` against `env` and apply the outcome.
    pub async fn start<Env>(
        &mut self,
        loader: EvaluatorLoader<Env>,
        env: &Env,
    ) -> Result<(), SessionError>
    where
        Env: Clone + Send + Sync + 'static,
    {
        if self.lifecycle != Lifecycle::Uninitialized {
            return Err(SessionError::AlreadyStarted {
                lifecycle: self.lifecycle,
            });
        }

        let loaded = loader.run(env).await;
        self.apply_load(loaded)
    }

    /// Load the evaluator named in the configuration from `registry`.
    pub async fn start_from_registry(
        &mut self,
        registry: &EvaluatorRegistry,
    ) -> Result<(), SessionError> {
        let loader = loader::named(self.config.evaluator.clone());
        self.start(loader, registry).await
    }

    /// Apply the result of a load effect the caller ran itself.
    pub fn apply_load(
        &mut self,
        loaded: Result<SharedEvaluator, LoadError>,
    ) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Uninitialized {
            return Err(SessionError::AlreadyStarted {
                lifecycle: self.lifecycle,
            });
        }

        match loaded {
            Ok(evaluator) => {
                info!(evaluator = evaluator.name(), "calculator ready");
                self.evaluator = Some(evaluator);
                self.lifecycle = Lifecycle::Ready;
                self.display = self.state.current_input().to_string();
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "evaluator failed to load");
                self.lifecycle = Lifecycle::Failed;
                self.display = self.config.load_error_label.clone();
                Err(SessionError::Load(err))
            }
        }
    }

    /// Handle one event and return the new display text.
    ///
    /// Evaluation errors are shown as the configured error label and
    /// returned. A recoverable error also resets the calculation, so the
    /// next press starts fresh; a fatal one moves the session to `Failed`.
    pub fn press(&mut self, event: Event) -> Result<&str, SessionError> {
        let Some(evaluator) = self
            .evaluator
            .as_ref()
            .filter(|_| self.lifecycle.accepts_input())
        else {
            return Err(self.reject(event));
        };
        if let Event::Digit(value) = event {
            Event::digit(value).map_err(|err| {
                warn!(error = %err, "rejected digit");
                err
            })?;
        }

        match handle(&self.state, event, evaluator) {
            Ok(step) => {
                if let Some(computation) = step.computation {
                    info!(
                        lhs = computation.lhs,
                        op = %computation.operation,
                        rhs = computation.rhs,
                        result = computation.result,
                        "computed"
                    );
                    self.tape = self.tape.record(TapeEntry::now(computation));
                }
                self.state = step.state;
                self.display = step.display;
                debug!(
                    %event,
                    phase = self.state.name(),
                    display = %self.display,
                    "handled event"
                );
                Ok(self.display.as_str())
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    /// Map a button annotation to an event and press it.
    pub fn press_control(
        &mut self,
        kind: &str,
        value: Option<&str>,
        op: Option<&str>,
    ) -> Result<&str, SessionError> {
        self.ensure_ready()?;
        let event = Event::from_control(kind, value, op).map_err(|err| {
            warn!(kind, error = %err, "rejected control");
            err
        })?;
        self.press(event)
    }

    /// Map a keyboard key to an event and press it.
    pub fn press_key(&mut self, key: &str) -> Result<&str, SessionError> {
        self.ensure_ready()?;
        let event = Event::from_key(key).map_err(|err| {
            warn!(key, error = %err, "rejected key");
            err
        })?;
        self.press(event)
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        if self.lifecycle.accepts_input() {
            Ok(())
        } else {
            Err(SessionError::NotReady {
                lifecycle: self.lifecycle,
            })
        }
    }

    fn reject(&self, event: Event) -> SessionError {
        warn!(
            event = event.kind(),
            lifecycle = %self.lifecycle,
            "input ignored, calculator not ready"
        );
        SessionError::NotReady {
            lifecycle: self.lifecycle,
        }
    }

    fn surface(&mut self, err: EvalError) -> SessionError {
        self.display = self.config.error_label.clone();
        self.state = CalculatorState::new();

        if err.is_recoverable() {
            warn!(error = %err, "evaluation failed, calculator reset");
        } else {
            error!(error = %err, "fatal evaluation failure, input disabled");
            self.lifecycle = Lifecycle::Failed;
        }

        SessionError::Evaluation(err)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("lifecycle", &self.lifecycle)
            .field("evaluator", &self.evaluator.as_ref().map(|e| e.name()))
            .field("state", &self.state)
            .field("display", &self.display)
            .field("tape_len", &self.tape.len())
            .finish()
    }
}
