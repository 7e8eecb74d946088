//! Per-user cooldown tracking.
//!
//! The gate owns a map from user identity to the moment of that user's last
//! successful divination. Admission and recording are separate operations:
//! a request is admitted first, served, and only then recorded. The
//! dispatcher therefore locks one [`GateSession`] across the whole
//! check-serve-record sequence, so two near-simultaneous requests from the
//! same user cannot both pass the check inside a single window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};

/// Seconds a non-privileged user must wait between divinations.
pub const COOLDOWN_SECS: u64 = 120;

/// The gate's admission decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request may proceed.
    Admitted,
    /// The user is still inside the cooldown window.
    Denied {
        /// Whole seconds until the window reopens.
        remaining_secs: u64,
    },
}

/// Tracks the last successful divination per user.
///
/// The map is reachable only through this gate. Privileged callers never
/// read or write it.
#[derive(Debug)]
pub struct CooldownGate {
    window: Duration,
    last_use: Mutex<HashMap<String, Instant>>,
}

impl CooldownGate {
    /// Create a gate with the given cooldown window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_use: Mutex::new(HashMap::new()),
        }
    }

    /// Lock the gate for one check-then-record sequence.
    pub fn lock(&self) -> GateSession<'_> {
        GateSession {
            window: self.window,
            map: self.last_use.lock(),
        }
    }

    /// Wipe all cooldown records.
    pub fn clear(&self) {
        self.last_use.lock().clear();
    }

    /// Whether a user currently has a cooldown record.
    pub fn is_tracked(&self, user: &str) -> bool {
        self.last_use.lock().contains_key(user)
    }
}

/// Exclusive access to the cooldown map for one dispatch.
///
/// While a session is held, no other dispatch can check or record, which
/// linearizes same-user request sequences.
#[derive(Debug)]
pub struct GateSession<'a> {
    window: Duration,
    map: MutexGuard<'a, HashMap<String, Instant>>,
}

impl GateSession<'_> {
    /// Decide whether a request from `user` may proceed at `now`.
    ///
    /// Privileged callers are always admitted and never touch the map.
    pub fn check_and_admit(&self, user: &str, privileged: bool, now: Instant) -> Admission {
        if privileged {
            return Admission::Admitted;
        }
        match self.map.get(user) {
            None => Admission::Admitted,
            Some(&last) => {
                let elapsed = now.duration_since(last);
                if elapsed >= self.window {
                    Admission::Admitted
                } else {
                    Admission::Denied {
                        remaining_secs: (self.window - elapsed).as_secs(),
                    }
                }
            }
        }
    }

    /// Record a successful divination for `user` at `now`.
    ///
    /// Call only once the response has been produced, and only for
    /// non-privileged users.
    pub fn record(&mut self, user: &str, now: Instant) {
        self.map.insert(user.to_string(), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> CooldownGate {
        CooldownGate::new(Duration::from_secs(COOLDOWN_SECS))
    }

    #[test]
    fn first_request_admitted() {
        let gate = gate();
        let session = gate.lock();
        assert_eq!(
            session.check_and_admit("alice", false, Instant::now()),
            Admission::Admitted
        );
    }

    #[test]
    fn denied_one_second_after_record() {
        let gate = gate();
        let t0 = Instant::now();
        let mut session = gate.lock();
        session.record("alice", t0);
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_secs(1)),
            Admission::Denied { remaining_secs: 119 }
        );
    }

    #[test]
    fn remaining_truncates_to_whole_seconds() {
        let gate = gate();
        let t0 = Instant::now();
        let mut session = gate.lock();
        session.record("alice", t0);
        // 119.5s remaining reports as 119.
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_millis(500)),
            Admission::Denied { remaining_secs: 119 }
        );
        // 0.5s remaining reports as 0.
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_millis(119_500)),
            Admission::Denied { remaining_secs: 0 }
        );
    }

    #[test]
    fn admitted_once_window_elapses() {
        let gate = gate();
        let t0 = Instant::now();
        let mut session = gate.lock();
        session.record("alice", t0);
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_secs(120)),
            Admission::Admitted
        );
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_secs(600)),
            Admission::Admitted
        );
    }

    #[test]
    fn privileged_always_admitted_and_never_tracked() {
        let gate = gate();
        let t0 = Instant::now();
        {
            let session = gate.lock();
            for i in 0..5 {
                assert_eq!(
                    session.check_and_admit("op", true, t0 + Duration::from_millis(i)),
                    Admission::Admitted
                );
            }
        }
        assert!(!gate.is_tracked("op"));
    }

    #[test]
    fn privileged_ignores_existing_record() {
        let gate = gate();
        let t0 = Instant::now();
        let session_check = {
            let mut session = gate.lock();
            session.record("alice", t0);
            session.check_and_admit("alice", true, t0 + Duration::from_secs(1))
        };
        assert_eq!(session_check, Admission::Admitted);
    }

    #[test]
    fn check_alone_writes_nothing() {
        let gate = gate();
        {
            let session = gate.lock();
            session.check_and_admit("alice", false, Instant::now());
        }
        assert!(!gate.is_tracked("alice"));
    }

    #[test]
    fn users_are_independent() {
        let gate = gate();
        let t0 = Instant::now();
        let mut session = gate.lock();
        session.record("alice", t0);
        assert_eq!(
            session.check_and_admit("bob", false, t0 + Duration::from_secs(1)),
            Admission::Admitted
        );
    }

    #[test]
    fn record_overwrites_previous_timestamp() {
        let gate = gate();
        let t0 = Instant::now();
        let mut session = gate.lock();
        session.record("alice", t0);
        session.record("alice", t0 + Duration::from_secs(200));
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_secs(201)),
            Admission::Denied { remaining_secs: 119 }
        );
    }

    #[test]
    fn clear_resets_all_records() {
        let gate = gate();
        let t0 = Instant::now();
        {
            let mut session = gate.lock();
            session.record("alice", t0);
            session.record("bob", t0);
        }
        gate.clear();
        assert!(!gate.is_tracked("alice"));
        assert!(!gate.is_tracked("bob"));
        let session = gate.lock();
        assert_eq!(
            session.check_and_admit("alice", false, t0 + Duration::from_secs(1)),
            Admission::Admitted
        );
    }

    #[test]
    fn concurrent_same_user_admits_exactly_once() {
        let gate = gate();
        let admitted = std::sync::atomic::AtomicU32::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let mut session = gate.lock();
                    let now = Instant::now();
                    if session.check_and_admit("alice", false, now) == Admission::Admitted {
                        session.record("alice", now);
                        admitted.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(admitted.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
