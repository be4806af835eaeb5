//! Effectful calculator operations using Stillwater 0.11.0.
//!
//! This module is the "imperative shell" around the pure core:
//!
//! - **Lifecycle**: `Uninitialized -> Ready | Failed`, gating input
//! - **Loader**: acquiring the evaluator as a Stillwater effect
//! - **Session**: the single owner of calculator state, the display and
//!   the tape
//!
//! Loaders follow Stillwater 0.11.0 conventions: they are built with the
//! free-standing constructors `pure()`, `fail()` and `from_fn()` and stored
//! as `BoxedEffect`.

mod lifecycle;
pub mod loader;
mod session;

pub use lifecycle::Lifecycle;
pub use loader::{EvaluatorLoader, EvaluatorRegistry, LoadError, SharedEvaluator};
pub use session::{Calculator, SessionError};
