//! Randomized outcome generation.
//!
//! A divination carries a probability and a verdict. The probability is the
//! sum of two independent uniform draws over [0, 50], giving a triangular
//! distribution over [0, 100] that peaks at 50, so extreme readings are
//! rarer than moderate ones. The verdict is a separate even coin flip; the
//! displayed probability does not influence it.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Upper bound of each of the two probability draws.
pub const DRAW_BOUND: f64 = 50.0;

/// Whether the divined event comes to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The event occurs.
    Occurs,
    /// The event does not occur.
    DoesNotOccur,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occurs => write!(f, "occurs"),
            Self::DoesNotOccur => write!(f, "does not occur"),
        }
    }
}

/// The result of a single divination draw.
///
/// Immutable once produced; it answers exactly one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Probability narrative in percent (0.0 to 100.0).
    pub probability: f64,
    /// The independent yes/no verdict.
    pub verdict: Verdict,
}

impl Outcome {
    /// The probability rendered with exactly two decimal digits.
    pub fn probability_text(&self) -> String {
        format!("{:.2}", self.probability)
    }
}

/// Draws outcomes from a process-lifetime random source.
///
/// The RNG is seeded once at construction and reused for every draw; it is
/// never reseeded per request.
#[derive(Debug)]
pub struct OutcomeGenerator {
    rng: Mutex<StdRng>,
}

impl OutcomeGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a generator with a fixed seed for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a probability and an independent verdict. Never fails.
    pub fn generate(&self) -> Outcome {
        let mut rng = self.rng.lock();
        let probability =
            rng.random_range(0.0..=DRAW_BOUND) + rng.random_range(0.0..=DRAW_BOUND);
        let verdict = if rng.random::<bool>() {
            Verdict::Occurs
        } else {
            Verdict::DoesNotOccur
        };
        Outcome {
            probability,
            verdict,
        }
    }
}
