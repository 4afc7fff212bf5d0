//! Page-wide handle on the free-trial dialog.
//!
//! Hero, platform and contact sections all open the same dialog, so the
//! controller lives in context instead of inside the modal component.

use lead_capture::{Field, LeadDraft, ModalController, SiteConfig, SubmitRejected, deliver};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::analytics::track_cta;
use crate::http::{FetchClient, local_timestamp};
use crate::timers::TimerBridge;

#[derive(Clone, Copy)]
pub struct LeadDialog {
    pub controller: RwSignal<ModalController>,
    timers: TimerBridge,
    endpoint: StoredValue<String>,
}

impl LeadDialog {
    /// Creates the dialog state and puts it in context for the whole page.
    pub fn provide(config: &SiteConfig) -> Self {
        let controller = RwSignal::new(ModalController::default());
        let dialog = Self {
            controller,
            timers: TimerBridge::new(controller),
            endpoint: StoredValue::new(config.form_endpoint.clone()),
        };
        provide_context(dialog);

        on_cleanup(move || {
            if let Some(commands) = dialog.controller.try_update(|c| c.teardown()) {
                dialog.timers.run(commands);
            }
        });
        dialog
    }

    /// Opens the dialog from a call-to-action; `cta` is the analytics label.
    pub fn open(&self, cta: &str) {
        track_cta(cta);
        self.controller.update(|c| {
            c.open();
        });
    }

    pub fn close(&self) {
        let command = self.controller.try_update(|c| c.close()).flatten();
        self.timers.run(command);
    }

    pub fn set_text(&self, field: Field, value: String) {
        self.edit(move |draft| {
            if let Some(slot) = draft.text_mut(field) {
                *slot = value;
            }
        });
    }

    pub fn set_privacy(&self, accepted: bool) {
        self.edit(move |draft| draft.privacy_accepted = accepted);
    }

    fn edit(&self, apply: impl FnOnce(&mut LeadDraft)) {
        self.controller.update(|c| c.edit(apply));
    }

    /// Validates and, if the form passes, posts it. Extra clicks while a
    /// request is outstanding are dropped by the controller.
    pub fn submit(&self) {
        let Some(attempt) = self.controller.try_update(|c| c.begin_submission()) else {
            return;
        };
        let pending = match attempt {
            Ok(pending) => pending,
            Err(SubmitRejected::Invalid(_)) => return,
            Err(rejected) => {
                debug!(%rejected, "submit ignored");
                return;
            }
        };

        let endpoint = self.endpoint.get_value();
        let dialog = *self;
        spawn_local(async move {
            let client = FetchClient::new(endpoint);
            // failures are logged by `deliver`
            let outcome = deliver(&client, &pending.lead, &local_timestamp()).await;
            if let Some(commands) = dialog
                .controller
                .try_update(|c| c.complete_submission(pending.ticket, outcome))
            {
                dialog.timers.run(commands);
            }
        });
    }

    pub fn dismiss_notification(&self) {
        let command = self.controller.try_update(|c| c.dismiss_notification()).flatten();
        self.timers.run(command);
    }
}

pub fn use_lead_dialog() -> LeadDialog {
    expect_context::<LeadDialog>()
}
