//! Lead-capture core for the Terra Precision landing page.
//!
//! Everything the free-trial dialog does that is not markup lives here, so it
//! can be exercised on the host without a browser:
//!
//! - [`form`] - the raw draft edited by the inputs and the validated record
//! - [`validate`] - per-field rules producing inline error messages
//! - [`payload`] - the JSON body sent to the mail-forwarding endpoint
//! - [`client`] - the single outbound request and its error type
//! - [`notification`] - the auto-dismissing toast
//! - [`modal`] - the dialog state machine tying the above together
//! - [`timer`] - generation-tagged timer tokens the UI schedules for us
//! - [`config`] - endpoint and link configuration
//!
//! The crate never touches a clock or the network itself. Timers come back as
//! [`TimerCommand`]s and requests go through a [`SubmissionClient`], which
//! keeps the browser glue in the `landing` crate thin.
//!
//! Created by the Terra Precision web team (c)2025

pub mod client;
pub mod config;
pub mod form;
pub mod modal;
pub mod notification;
pub mod payload;
pub mod timer;
pub mod validate;

pub use client::{SubmissionClient, SubmissionError, deliver, is_success_status};
pub use config::{ConfigError, SiteConfig};
pub use form::{Crop, Field, LeadDraft, PropertySize, ValidLead};
pub use modal::{ModalController, ModalState, PendingSubmission, SubmitRejected, Timings};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind, NotificationPresenter};
pub use payload::SubmissionPayload;
pub use timer::{TimerCommand, TimerKind, TimerToken};
pub use validate::{FieldErrors, validate};
