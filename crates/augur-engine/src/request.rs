//! Request model for inbound divination commands.

use serde::{Deserialize, Serialize};

/// Who issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Caller {
    /// A player with a stable identity and a pre-resolved privilege level.
    Player {
        /// Canonical player name; the cooldown key.
        name: String,
        /// Whether the player bypasses the cooldown window.
        privileged: bool,
    },
    /// A non-player origin (console, script). Cannot be rate-limited or
    /// answered, so it is turned away before admission.
    Console,
}

/// One divination request, alive for a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The request origin.
    pub caller: Caller,
    /// Raw query text as received.
    pub query: String,
}

impl Request {
    /// Build a request on behalf of a player.
    pub fn from_player(
        name: impl Into<String>,
        privileged: bool,
        query: impl Into<String>,
    ) -> Self {
        Self {
            caller: Caller::Player {
                name: name.into(),
                privileged,
            },
            query: query.into(),
        }
    }
}

/// Strip double-quote characters from a raw query.
///
/// No other normalization is applied.
pub fn sanitize_query(raw: &str) -> String {
    raw.replace('"', "")
}
