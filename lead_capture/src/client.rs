//! The single outbound request of a submit attempt.

use thiserror::Error;
use tracing::{debug, warn};

use crate::form::ValidLead;
use crate::payload::SubmissionPayload;

/// Why a submission did not go through.
///
/// The dialog treats every variant the same way (one error toast); the
/// distinction only matters for the diagnostic log.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),
    #[error("payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmissionError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Any 2xx counts as accepted.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Transport for the lead payload.
///
/// Implementations issue exactly one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait SubmissionClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}

/// Builds the payload for `lead` and sends it once through `client`.
///
/// Failures are logged here, at the client boundary, and returned unchanged.
pub async fn deliver<C: SubmissionClient>(
    client: &C,
    lead: &ValidLead,
    submitted_at: &str,
) -> Result<(), SubmissionError> {
    let payload = SubmissionPayload::new(lead, submitted_at);
    debug!(crop = lead.crop().value(), size = lead.property_size().token(), "sending lead");

    match client.send(&payload).await {
        Ok(()) => {
            debug!("lead accepted");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "lead submission failed");
            Err(err)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every payload and answers with a fixed HTTP status.
    pub(crate) struct RecordingClient {
        pub(crate) status: u16,
        pub(crate) sent: RefCell<Vec<SubmissionPayload>>,
    }

    impl RecordingClient {
        pub(crate) fn answering(status: u16) -> Self {
            Self {
                status,
                sent: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl SubmissionClient for RecordingClient {
        async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(payload.clone());
            if is_success_status(self.status) {
                Ok(())
            } else {
                Err(SubmissionError::Status(self.status))
            }
        }
    }

    /// Fails before any response arrives.
    pub(crate) struct OfflineClient;

    impl SubmissionClient for OfflineClient {
        async fn send(&self, _payload: &SubmissionPayload) -> Result<(), SubmissionError> {
            Err(SubmissionError::Transport("Failed to fetch".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::{OfflineClient, RecordingClient};
    use super::*;
    use crate::form::LeadDraft;
    use crate::validate::validate;

    fn lead() -> ValidLead {
        validate(&LeadDraft {
            email: "a@b.com".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            company: String::new(),
            phone: "16999999999".into(),
            crop: "soja".into(),
            property_size: "ate-1000".into(),
            privacy_accepted: true,
        })
        .unwrap()
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(199));
        assert!(!is_success_status(302));
        assert!(!is_success_status(422));
        assert!(!is_success_status(500));
    }

    #[test]
    fn ok_response_sends_exactly_one_request() {
        let client = RecordingClient::answering(200);
        block_on(deliver(&client, &lead(), "agora")).unwrap();

        assert_eq!(client.calls(), 1);
        let sent = client.sent.borrow();
        assert_eq!(sent[0].reply_to, "a@b.com");
        assert!(sent[0].message.contains("Enviado em: agora"));
    }

    #[test]
    fn non_ok_response_is_a_status_error() {
        let client = RecordingClient::answering(500);
        let err = block_on(deliver(&client, &lead(), "agora")).unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn transport_failure_is_not_retried() {
        let err = block_on(deliver(&OfflineClient, &lead(), "agora")).unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "request could not be sent: Failed to fetch");
    }
}
