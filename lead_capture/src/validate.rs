//! Field rules for the free-trial form.
//!
//! Each field is checked on its own; there are no cross-field rules. Values
//! are trimmed before checking, and the trimmed values are what end up in the
//! [`ValidLead`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::form::{Crop, Field, LeadDraft, PropertySize, ValidLead};

pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const EMAIL_INVALID: &str = "E-mail inválido";
pub const FIRST_NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres";
pub const LAST_NAME_TOO_SHORT: &str = "Sobrenome deve ter pelo menos 2 caracteres";
pub const PHONE_INVALID: &str = "Número de telefone inválido";
pub const CROP_REQUIRED: &str = "Selecione uma cultura";
pub const PROPERTY_SIZE_REQUIRED: &str = "Selecione uma opção de hectares";
pub const PRIVACY_REQUIRED: &str = "Você deve aceitar a política de privacidade";

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;

/// Inline error messages keyed by field, in dialog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").unwrap()
    })
}

/// Standard e-mail syntax: no leading dot, no consecutive dots in the address,
/// a dotted domain ending in an alphabetic TLD of two or more letters.
pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && email_regex().is_match(candidate)
}

/// Checks a single field of the draft.
pub fn check_field(draft: &LeadDraft, field: Field) -> Result<(), &'static str> {
    match field {
        Field::Email => {
            let email = draft.email.trim();
            if email.is_empty() {
                Err(EMAIL_REQUIRED)
            } else if !is_valid_email(email) {
                Err(EMAIL_INVALID)
            } else {
                Ok(())
            }
        }
        Field::FirstName => min_chars(&draft.first_name, MIN_NAME_CHARS, FIRST_NAME_TOO_SHORT),
        Field::LastName => min_chars(&draft.last_name, MIN_NAME_CHARS, LAST_NAME_TOO_SHORT),
        Field::Company => Ok(()),
        Field::Phone => min_chars(&draft.phone, MIN_PHONE_CHARS, PHONE_INVALID),
        Field::Crop => Crop::from_value(&draft.crop)
            .map(|_| ())
            .ok_or(CROP_REQUIRED),
        Field::PropertySize => PropertySize::from_token(&draft.property_size)
            .map(|_| ())
            .ok_or(PROPERTY_SIZE_REQUIRED),
        Field::Privacy => {
            if draft.privacy_accepted {
                Ok(())
            } else {
                Err(PRIVACY_REQUIRED)
            }
        }
    }
}

fn min_chars(value: &str, min: usize, message: &'static str) -> Result<(), &'static str> {
    if value.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(message)
    }
}

/// Runs every field rule and builds a normalized [`ValidLead`], or returns the
/// full set of field errors. All fields are always checked.
pub fn validate(draft: &LeadDraft) -> Result<ValidLead, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Err(message) = check_field(draft, field) {
            errors.0.insert(field, message);
        }
    }

    let crop = Crop::from_value(&draft.crop);
    let property_size = PropertySize::from_token(&draft.property_size);

    match (crop, property_size) {
        (Some(crop), Some(property_size)) if errors.is_empty() => {
            let company = draft.company.trim();
            Ok(ValidLead {
                email: draft.email.trim().to_string(),
                first_name: draft.first_name.trim().to_string(),
                last_name: draft.last_name.trim().to_string(),
                company: (!company.is_empty()).then(|| company.to_string()),
                phone: draft.phone.trim().to_string(),
                crop,
                property_size,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ana() -> LeadDraft {
        LeadDraft {
            email: "a@b.com".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            company: String::new(),
            phone: "16999999999".into(),
            crop: "soja".into(),
            property_size: "ate-1000".into(),
            privacy_accepted: true,
        }
    }

    #[test]
    fn example_record_is_valid() {
        let lead = validate(&ana()).unwrap();
        assert_eq!(lead.email(), "a@b.com");
        assert_eq!(lead.full_name(), "Ana Silva");
        assert_eq!(lead.company(), None);
        assert_eq!(lead.crop(), Crop::Soja);
        assert_eq!(lead.property_size(), PropertySize::UpTo1000);
    }

    #[test]
    fn missing_required_field_flags_only_that_field() {
        let cases: [(Field, fn(&mut LeadDraft)); 7] = [
            (Field::Email, |d| d.email.clear()),
            (Field::FirstName, |d| d.first_name.clear()),
            (Field::LastName, |d| d.last_name.clear()),
            (Field::Phone, |d| d.phone.clear()),
            (Field::Crop, |d| d.crop.clear()),
            (Field::PropertySize, |d| d.property_size.clear()),
            (Field::Privacy, |d| d.privacy_accepted = false),
        ];

        for (field, clear) in cases {
            let mut draft = ana();
            clear(&mut draft);
            let errors = validate(&draft).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "field {field}");
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&LeadDraft::default()).unwrap_err();
        let expected: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(errors.fields().collect::<Vec<_>>(), expected);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn invalid_email_fails_regardless_of_other_fields() {
        for bad in [
            "plainaddress",
            "a@b",
            "a@b.c",
            "@b.com",
            "a@.com",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a b@c.com",
        ] {
            let mut draft = ana();
            draft.email = bad.into();
            assert_eq!(validate(&draft).unwrap_err().get(Field::Email), Some(EMAIL_INVALID), "{bad}");

            let mut empty = LeadDraft::default();
            empty.email = bad.into();
            assert_eq!(validate(&empty).unwrap_err().get(Field::Email), Some(EMAIL_INVALID), "{bad}");
        }
    }

    #[test]
    fn accepts_common_email_shapes() {
        for good in ["a@b.com", "joao.silva+lead@fazenda.com.br", "X_Y@Agro-Sul.COM"] {
            assert!(is_valid_email(good), "{good}");
        }
    }

    #[test]
    fn names_need_two_characters() {
        let mut draft = ana();
        draft.first_name = "A".into();
        draft.last_name = "Zé".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::FirstName), Some(FIRST_NAME_TOO_SHORT));
        assert!(!errors.contains(Field::LastName));
    }

    #[test]
    fn whitespace_does_not_count_towards_length() {
        let mut draft = ana();
        draft.first_name = "  A  ".into();
        draft.phone = " 123456789 ".into();
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains(Field::FirstName));
        assert_eq!(errors.get(Field::Phone), Some(PHONE_INVALID));
    }

    #[test]
    fn phone_checks_length_only() {
        let mut draft = ana();
        draft.phone = "(16) 9999".into();
        assert!(validate(&draft).is_err());

        draft.phone = "(16) 99999-9999".into();
        assert_eq!(validate(&draft).unwrap().phone(), "(16) 99999-9999");
    }

    #[test]
    fn crop_outside_the_list_is_rejected() {
        let mut draft = ana();
        draft.crop = "banana".into();
        assert_eq!(validate(&draft).unwrap_err().get(Field::Crop), Some(CROP_REQUIRED));

        draft.crop = "Milho".into();
        assert_eq!(validate(&draft).unwrap().crop(), Crop::Milho);
    }

    #[test]
    fn unknown_bracket_is_rejected() {
        let mut draft = ana();
        draft.property_size = "5000".into();
        assert_eq!(
            validate(&draft).unwrap_err().get(Field::PropertySize),
            Some(PROPERTY_SIZE_REQUIRED)
        );
    }

    #[test]
    fn normalizes_company_and_whitespace() {
        let mut draft = ana();
        draft.email = "  a@b.com ".into();
        draft.company = "   ".into();
        let lead = validate(&draft).unwrap();
        assert_eq!(lead.email(), "a@b.com");
        assert_eq!(lead.company(), None);

        draft.company = " Fazenda Boa Vista ".into();
        assert_eq!(validate(&draft).unwrap().company(), Some("Fazenda Boa Vista"));
    }

    #[test]
    fn company_is_never_an_error() {
        let mut draft = LeadDraft::default();
        draft.company = "x".into();
        assert!(!validate(&draft).unwrap_err().contains(Field::Company));
    }
}
