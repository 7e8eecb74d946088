//! Cooldown-gated divination engine.
//!
//! A user submits a free-text question and receives a randomized probability
//! together with an independent yes/no verdict. Non-privileged users are
//! throttled by a fixed per-user cooldown window; privileged users bypass
//! the window entirely and leave no trace in the cooldown map.

pub mod config;
pub mod cooldown;
pub mod dispatch;
pub mod error;
pub mod outcome;
pub mod request;

pub use config::EngineConfig;
pub use cooldown::{Admission, CooldownGate, GateSession};
pub use dispatch::{Divination, DivinationService};
pub use error::{DispatchError, EngineResult};
pub use outcome::{Outcome, OutcomeGenerator, Verdict};
pub use request::{Caller, Request, sanitize_query};
