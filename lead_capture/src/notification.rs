//! Toast shown after a submission settles.
//!
//! Only one toast exists at a time. Showing a new one replaces the current
//! toast and restarts its display window.

use std::time::Duration;

use serde::Serialize;

use crate::timer::{TimerCommand, TimerKind, TimerSlot, TimerToken};

/// How long a toast stays up without user action.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Changes every time a toast is shown; keys the progress-bar animation
    pub id: u64,
}

#[derive(Debug, Clone)]
pub struct NotificationPresenter {
    current: Option<Notification>,
    timer: TimerSlot,
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl NotificationPresenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            timer: TimerSlot::new(TimerKind::NotificationDismiss, ttl),
        }
    }

    /// Shows a toast, replacing any visible one. The returned command starts
    /// the auto-dismiss timer.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> TimerCommand {
        let command = self.timer.arm();
        self.current = Some(Notification {
            kind,
            title: title.into(),
            message: message.into(),
            id: self.timer.generation(),
        });
        command
    }

    /// Hides the toast right away and cancels its timer.
    pub fn dismiss(&mut self) -> Option<TimerCommand> {
        self.current = None;
        self.timer.disarm()
    }

    /// Returns `true` when `token` hid the toast.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.fire(token) {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
