//! Request dispatch: admission, generation, recording.
//!
//! [`DivinationService`] is the single owner of the engine's process-wide
//! state (the cooldown gate and the random source). It is constructed once
//! at startup and handed by reference to whatever surface receives
//! commands; there are no global singletons.

use std::time::Instant;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::cooldown::{Admission, CooldownGate};
use crate::error::{DispatchError, EngineResult};
use crate::outcome::{Outcome, OutcomeGenerator};
use crate::request::{Caller, Request, sanitize_query};

/// A successful divination reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divination {
    /// The sanitized query, echoed back to the user.
    pub query: String,
    /// The drawn probability and verdict.
    pub outcome: Outcome,
}

impl Divination {
    /// The two outbound lines: the echoed query, then the reading.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("You asked: {}", self.query),
            format!(
                "Result: a {}% chance that it {}.",
                self.outcome.probability_text(),
                self.outcome.verdict
            ),
        ]
    }
}

impl std::fmt::Display for Divination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [echo, reading] = self.lines();
        write!(f, "{echo}\n{reading}")
    }
}

/// The divination service: one cooldown gate plus one outcome generator.
#[derive(Debug)]
pub struct DivinationService {
    gate: CooldownGate,
    generator: OutcomeGenerator,
}

impl DivinationService {
    /// Construct the service. The random source is seeded here, once for
    /// the service's lifetime.
    pub fn new(config: EngineConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => OutcomeGenerator::with_seed(seed),
            None => OutcomeGenerator::from_entropy(),
        };
        tracing::info!(
            cooldown_secs = config.cooldown.as_secs(),
            seeded = config.seed.is_some(),
            "divination service ready"
        );
        Self {
            gate: CooldownGate::new(config.cooldown),
            generator,
        }
    }

    /// The cooldown gate, for inspection.
    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Handle one request end to end.
    ///
    /// Ineligible callers and blank queries are rejected before the gate is
    /// consulted, so neither consumes a cooldown window. On admission the
    /// outcome is generated and, for non-privileged callers, the use is
    /// recorded, all under one gate session, so concurrent same-user
    /// requests cannot double-admit.
    pub fn dispatch(&self, request: &Request) -> EngineResult<Divination> {
        self.dispatch_at(request, Instant::now())
    }

    fn dispatch_at(&self, request: &Request, now: Instant) -> EngineResult<Divination> {
        let (user, privileged) = match &request.caller {
            Caller::Player { name, privileged } => (name.as_str(), *privileged),
            Caller::Console => return Err(DispatchError::NotEligible),
        };

        let query = sanitize_query(&request.query);
        if query.trim().is_empty() {
            return Err(DispatchError::EmptyQuery);
        }

        let mut gate = self.gate.lock();
        if let Admission::Denied { remaining_secs } = gate.check_and_admit(user, privileged, now)
        {
            tracing::debug!(user, remaining_secs, "divination denied, still cooling down");
            return Err(DispatchError::OnCooldown { remaining_secs });
        }

        let outcome = self.generator.generate();
        if !privileged {
            gate.record(user, now);
            tracing::debug!(user, "cooldown recorded");
        }

        Ok(Divination { query, outcome })
    }

    /// Tear the service down, wiping all cooldown state.
    pub fn shutdown(&self) {
        self.gate.clear();
        tracing::info!("divination service stopped, cooldown state cleared");
    }
}
