//! Runs the core's timer commands on browser timeouts.

use std::collections::HashMap;

use lead_capture::{ModalController, TimerCommand, TimerKind};
use leptos::prelude::*;
use tracing::error;

/// One live timeout per [`TimerKind`]; fired tokens go back to the controller.
#[derive(Clone, Copy)]
pub struct TimerBridge {
    controller: RwSignal<ModalController>,
    handles: StoredValue<HashMap<TimerKind, TimeoutHandle>>,
}

impl TimerBridge {
    pub fn new(controller: RwSignal<ModalController>) -> Self {
        Self {
            controller,
            handles: StoredValue::new(HashMap::new()),
        }
    }

    pub fn run(&self, commands: impl IntoIterator<Item = TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::Start { token, delay } => {
                    self.clear(token.kind());
                    let controller = self.controller;
                    let scheduled = set_timeout_with_handle(
                        move || {
                            // the view may be gone by now
                            controller.try_update(|c| c.on_timer(token));
                        },
                        delay,
                    );
                    match scheduled {
                        Ok(handle) => {
                            self.handles.update_value(|h| {
                                h.insert(token.kind(), handle);
                            });
                        }
                        Err(err) => error!(error = ?err, kind = ?token.kind(), "could not schedule timer"),
                    }
                }
                TimerCommand::Cancel(kind) => self.clear(kind),
            }
        }
    }

    fn clear(&self, kind: TimerKind) {
        if let Some(handle) = self.handles.try_update_value(|h| h.remove(&kind)).flatten() {
            handle.clear();
        }
    }
}
