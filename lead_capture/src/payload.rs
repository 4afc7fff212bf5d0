//! JSON body posted to the mail-forwarding endpoint.
//!
//! The endpoint forwards `message` as the e-mail body; `_replyto` and
//! `_subject` are its control fields for the reply address and subject line.

use serde::Serialize;

use crate::client::SubmissionError;
use crate::form::ValidLead;

pub const SUBJECT: &str = "Nova Solicitação de Teste Gratuito - Terra Precision";
pub const SHORT_SUBJECT: &str = "Nova Solicitação de Teste Gratuito";
const COMPANY_MISSING: &str = "Não informado";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub email: String,
    pub subject: &'static str,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub short_subject: &'static str,
}

impl SubmissionPayload {
    /// `submitted_at` is the already formatted local timestamp.
    pub fn new(lead: &ValidLead, submitted_at: &str) -> Self {
        Self {
            email: lead.email().to_string(),
            subject: SUBJECT,
            message: render_message(lead, submitted_at),
            reply_to: lead.email().to_string(),
            short_subject: SHORT_SUBJECT,
        }
    }

    pub fn to_json(&self) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Plain-text body listing every field of the request.
pub fn render_message(lead: &ValidLead, submitted_at: &str) -> String {
    format!(
        "Nova solicitação de teste gratuito:\n\
         \n\
         Nome: {name}\n\
         Email: {email}\n\
         Telefone: {phone}\n\
         Empresa: {company}\n\
         Cultura Principal: {crop}\n\
         Área (Hectares): {hectares}\n\
         \n\
         Enviado em: {submitted_at}\n",
        name = lead.full_name(),
        email = lead.email(),
        phone = lead.phone(),
        company = lead.company().unwrap_or(COMPANY_MISSING),
        crop = lead.crop().value(),
        hectares = lead.property_size().token(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::LeadDraft;
    use crate::validate::validate;
    use pretty_assertions::assert_eq;

    fn lead(company: &str) -> ValidLead {
        validate(&LeadDraft {
            email: "a@b.com".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            company: company.into(),
            phone: "16999999999".into(),
            crop: "Cana-de-açúcar".into(),
            property_size: "1001-2000".into(),
            privacy_accepted: true,
        })
        .unwrap()
    }

    #[test]
    fn message_lists_every_field() {
        let message = render_message(&lead("Fazenda Boa Vista"), "18/10/2026, 09:30:00");
        let expected = "Nova solicitação de teste gratuito:\n\
                        \n\
                        Nome: Ana Silva\n\
                        Email: a@b.com\n\
                        Telefone: 16999999999\n\
                        Empresa: Fazenda Boa Vista\n\
                        Cultura Principal: cana-de-açúcar\n\
                        Área (Hectares): 1001-2000\n\
                        \n\
                        Enviado em: 18/10/2026, 09:30:00\n";
        assert_eq!(message, expected);
    }

    #[test]
    fn missing_company_is_spelled_out() {
        let message = render_message(&lead(""), "agora");
        assert!(message.contains("Empresa: Não informado\n"));
    }

    #[test]
    fn json_uses_endpoint_field_names() {
        let payload = SubmissionPayload::new(&lead(""), "agora");
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["_replyto"], "a@b.com");
        assert_eq!(value["subject"], SUBJECT);
        assert_eq!(value["_subject"], SHORT_SUBJECT);
        assert!(value["message"].as_str().unwrap().contains("Nome: Ana Silva"));
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
