//! Timer tokens for the dialog and the toast.
//!
//! The core never sleeps. When something has to happen later it returns a
//! [`TimerCommand::Start`] carrying a [`TimerToken`]; the host schedules a
//! callback and hands the token back when it fires. Every (re)arm bumps the
//! slot's generation, so a token from a cancelled or replaced timer is
//! recognised as stale and ignored.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hides the toast
    NotificationDismiss,
    /// Closes the dialog after a successful submission
    ModalAutoClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    kind: TimerKind,
    generation: u64,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the host must do with its timers.
///
/// At most one timer per [`TimerKind`] is live: `Start` replaces any running
/// timer of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start { token: TimerToken, delay: Duration },
    Cancel(TimerKind),
}

/// One logical timer with a fixed delay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimerSlot {
    kind: TimerKind,
    delay: Duration,
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    pub(crate) fn new(kind: TimerKind, delay: Duration) -> Self {
        Self {
            kind,
            delay,
            generation: 0,
            armed: false,
        }
    }

    pub(crate) fn arm(&mut self) -> TimerCommand {
        self.generation += 1;
        self.armed = true;
        TimerCommand::Start {
            token: TimerToken {
                kind: self.kind,
                generation: self.generation,
            },
            delay: self.delay,
        }
    }

    pub(crate) fn disarm(&mut self) -> Option<TimerCommand> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        Some(TimerCommand::Cancel(self.kind))
    }

    /// Consumes `token` if it belongs to the live timer of this slot.
    pub(crate) fn fire(&mut self, token: TimerToken) -> bool {
        if !self.armed || token.kind != self.kind || token.generation != self.generation {
            return false;
        }
        self.armed = false;
        true
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Virtual clock that executes [`TimerCommand`]s the way the browser bridge does.
    #[derive(Debug, Default)]
    pub(crate) struct ManualClock {
        now: Duration,
        pending: Vec<(Duration, TimerToken)>,
    }

    impl ManualClock {
        pub(crate) fn apply(&mut self, commands: impl IntoIterator<Item = TimerCommand>) {
            for command in commands {
                match command {
                    TimerCommand::Start { token, delay } => {
                        self.pending.retain(|(_, t)| t.kind != token.kind);
                        self.pending.push((self.now + delay, token));
                    }
                    TimerCommand::Cancel(kind) => self.pending.retain(|(_, t)| t.kind != kind),
                }
            }
        }

        /// Moves time forward and returns the tokens that came due, earliest first.
        pub(crate) fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
            self.now += by;
            let now = self.now;
            let mut due: Vec<_> = self.pending.iter().copied().filter(|(at, _)| *at <= now).collect();
            self.pending.retain(|(at, _)| *at > now);
            due.sort_by_key(|(at, _)| *at);
            due.into_iter().map(|(_, token)| token).collect()
        }

        pub(crate) fn is_pending(&self, kind: TimerKind) -> bool {
            self.pending.iter().any(|(_, t)| t.kind == kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearming_invalidates_previous_token() {
        let mut slot = TimerSlot::new(TimerKind::NotificationDismiss, Duration::from_secs(5));
        let TimerCommand::Start { token: first, .. } = slot.arm() else {
            panic!("arm must start a timer");
        };
        let TimerCommand::Start { token: second, .. } = slot.arm() else {
            panic!("arm must start a timer");
        };

        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.fire(second), "a token fires once");
    }

    #[test]
    fn disarm_only_cancels_live_timers() {
        let mut slot = TimerSlot::new(TimerKind::ModalAutoClose, Duration::from_secs(2));
        assert_eq!(slot.disarm(), None);

        let TimerCommand::Start { token, delay } = slot.arm() else {
            panic!("arm must start a timer");
        };
        assert_eq!(delay, Duration::from_secs(2));
        assert_eq!(slot.disarm(), Some(TimerCommand::Cancel(TimerKind::ModalAutoClose)));
        assert!(!slot.fire(token));
    }

    #[test]
    fn tokens_of_other_kinds_are_ignored() {
        let mut close = TimerSlot::new(TimerKind::ModalAutoClose, Duration::from_secs(2));
        let mut toast = TimerSlot::new(TimerKind::NotificationDismiss, Duration::from_secs(5));
        close.arm();
        let TimerCommand::Start { token, .. } = toast.arm() else {
            panic!("arm must start a timer");
        };
        assert!(!close.fire(token));
        assert!(toast.fire(token));
    }

    #[test]
    fn manual_clock_replaces_same_kind() {
        let mut slot = TimerSlot::new(TimerKind::NotificationDismiss, Duration::from_secs(5));
        let mut clock = testing::ManualClock::default();

        clock.apply([slot.arm()]);
        assert!(clock.advance(Duration::from_secs(3)).is_empty());
        clock.apply([slot.arm()]);

        assert!(clock.advance(Duration::from_secs(3)).is_empty());
        let due = clock.advance(Duration::from_secs(2));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].generation(), 2);
        assert!(!clock.is_pending(TimerKind::NotificationDismiss));
    }
}
