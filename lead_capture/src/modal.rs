//! State machine behind the free-trial dialog.
//!
//! ```text
//! Closed --open--> Open --submit (valid)--> Submitting --ok--> Success --2s--> Closed
//!                   ^  \--submit (invalid): stays Open     |
//!                   \------------- error ------------------/
//! ```
//!
//! A submit attempt is split in two so the host can await the request in
//! between: [`ModalController::begin_submission`] validates and hands out a
//! [`PendingSubmission`], [`ModalController::complete_submission`] takes the
//! outcome. A failed request drops straight back to `Open` with the draft
//! intact, so there is no separate error state to leave.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::client::SubmissionError;
use crate::form::{LeadDraft, ValidLead};
use crate::notification::{NOTIFICATION_TTL, Notification, NotificationKind, NotificationPresenter};
use crate::timer::{TimerCommand, TimerKind, TimerSlot, TimerToken};
use crate::validate::{FieldErrors, validate};

/// Delay between a successful submission and the dialog closing itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(2);

pub const SUCCESS_TITLE: &str = "Solicitação Enviada!";
pub const SUCCESS_MESSAGE: &str = "Recebemos sua solicitação de teste gratuito. Nossa equipe entrará em contato em breve para agendar a demonstração.";
pub const ERROR_TITLE: &str = "Erro ao Enviar";
pub const ERROR_MESSAGE: &str = "Não foi possível enviar sua solicitação. Por favor, tente novamente ou entre em contato via WhatsApp.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub notification_ttl: Duration,
    pub auto_close_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_ttl: NOTIFICATION_TTL,
            auto_close_delay: AUTO_CLOSE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    /// Request in flight; submit is disabled
    Submitting,
    /// Request accepted; the dialog closes once the auto-close timer fires
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

/// A validated record waiting to be sent.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub lead: ValidLead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("dialog is not open")]
    NotOpen,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0} field(s) failed validation")]
    Invalid(usize),
}

#[derive(Debug, Clone)]
pub struct ModalController {
    state: ModalState,
    draft: LeadDraft,
    errors: FieldErrors,
    /// Set after the first rejected submit; edits re-run validation from then on
    revalidate: bool,
    next_ticket: u64,
    in_flight: Option<SubmissionTicket>,
    auto_close: TimerSlot,
    notifications: NotificationPresenter,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl ModalController {
    pub fn new(timings: Timings) -> Self {
        Self {
            state: ModalState::Closed,
            draft: LeadDraft::default(),
            errors: FieldErrors::default(),
            revalidate: false,
            next_ticket: 0,
            in_flight: None,
            auto_close: TimerSlot::new(TimerKind::ModalAutoClose, timings.auto_close_delay),
            notifications: NotificationPresenter::new(timings.notification_ttl),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// True while a request is outstanding, even if the dialog was closed and
    /// reopened in the meantime.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Opens the dialog with an empty form. Ignored unless closed.
    pub fn open(&mut self) -> bool {
        if self.state != ModalState::Closed {
            return false;
        }
        self.state = ModalState::Open;
        self.draft = LeadDraft::default();
        self.errors.clear();
        self.revalidate = false;
        debug!("lead dialog opened");
        true
    }

    /// Closes the dialog and cancels a pending auto-close. A request already
    /// in flight keeps running; its toast still shows when it settles.
    pub fn close(&mut self) -> Option<TimerCommand> {
        if self.state != ModalState::Closed {
            debug!(from = ?self.state, "lead dialog closed");
        }
        self.state = ModalState::Closed;
        self.auto_close.disarm()
    }

    /// Applies an edit to the draft. Ignored while closed or after success.
    pub fn edit(&mut self, apply: impl FnOnce(&mut LeadDraft)) {
        if !matches!(self.state, ModalState::Open | ModalState::Submitting) {
            return;
        }
        apply(&mut self.draft);
        if self.revalidate {
            self.errors = validate(&self.draft).err().unwrap_or_default();
        }
    }

    /// Validates every field and, when they all pass, moves to `Submitting`.
    ///
    /// On rejection nothing is sent; invalid fields are available through
    /// [`ModalController::errors`].
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        match self.state {
            ModalState::Open => {}
            ModalState::Submitting => return Err(SubmitRejected::InFlight),
            ModalState::Closed | ModalState::Success => return Err(SubmitRejected::NotOpen),
        }
        if self.in_flight.is_some() {
            return Err(SubmitRejected::InFlight);
        }

        match validate(&self.draft) {
            Err(errors) => {
                let count = errors.len();
                self.errors = errors;
                self.revalidate = true;
                debug!(invalid = count, "lead rejected by validation");
                Err(SubmitRejected::Invalid(count))
            }
            Ok(lead) => {
                self.errors.clear();
                self.next_ticket += 1;
                let ticket = SubmissionTicket(self.next_ticket);
                self.in_flight = Some(ticket);
                self.state = ModalState::Submitting;
                Ok(PendingSubmission { ticket, lead })
            }
        }
    }

    /// Routes the outcome of a request to the toast and moves the dialog on.
    ///
    /// Success resets the form and arms the auto-close timer; failure returns
    /// to `Open` with the draft untouched. If the dialog was closed while the
    /// request was in flight only the toast is shown.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), SubmissionError>,
    ) -> Vec<TimerCommand> {
        if self.in_flight != Some(ticket) {
            debug!(?ticket, "ignoring outcome of unknown submission");
            return Vec::new();
        }
        self.in_flight = None;
        let submitting = self.state == ModalState::Submitting;

        match outcome {
            Ok(()) => {
                let mut commands =
                    vec![self.notifications.show(NotificationKind::Success, SUCCESS_TITLE, SUCCESS_MESSAGE)];
                if submitting {
                    self.draft = LeadDraft::default();
                    self.errors.clear();
                    self.revalidate = false;
                    self.state = ModalState::Success;
                    commands.push(self.auto_close.arm());
                }
                commands
            }
            Err(err) => {
                debug!(error = %err, "returning to the form after failed submission");
                if submitting {
                    self.state = ModalState::Open;
                }
                vec![self.notifications.show(NotificationKind::Error, ERROR_TITLE, ERROR_MESSAGE)]
            }
        }
    }

    /// Handles a fired timer. Returns `true` when visible state changed.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        match token.kind() {
            TimerKind::NotificationDismiss => self.notifications.on_timer(token),
            TimerKind::ModalAutoClose => {
                if !self.auto_close.fire(token) || self.state != ModalState::Success {
                    return false;
                }
                self.state = ModalState::Closed;
                debug!("lead dialog auto-closed");
                true
            }
        }
    }

    pub fn dismiss_notification(&mut self) -> Option<TimerCommand> {
        self.notifications.dismiss()
    }

    /// Drops every timer, for when the hosting view goes away.
    pub fn teardown(&mut self) -> Vec<TimerCommand> {
        self.state = ModalState::Closed;
        self.auto_close
            .disarm()
            .into_iter()
            .chain(self.notifications.dismiss())
            .collect()
    }
}
