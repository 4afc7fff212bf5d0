//! Form model for the free-trial request.
//!
//! [`LeadDraft`] mirrors the inputs one to one: plain strings and a checkbox,
//! edited as the user types. [`ValidLead`] is what the validator hands out
//! once every rule passes. It has no public constructor and no setters, so a
//! submission always works on a record built fresh from the current draft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields of the free-trial form.
///
/// [`Field::name`] is the input/wire name used by the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Company,
    Phone,
    Crop,
    PropertySize,
    Privacy,
}

impl Field {
    /// All fields in the order they appear in the dialog.
    pub const ALL: [Field; 8] = [
        Field::Email,
        Field::FirstName,
        Field::LastName,
        Field::Company,
        Field::Phone,
        Field::Crop,
        Field::PropertySize,
        Field::Privacy,
    ];

    /// Input name (`id`/`name` attribute) of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FirstName => "nome",
            Field::LastName => "sobrenome",
            Field::Company => "empresa",
            Field::Phone => "telefone",
            Field::Crop => "cultura",
            Field::PropertySize => "hectares",
            Field::Privacy => "privacidade",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "E-mail",
            Field::FirstName => "Nome",
            Field::LastName => "Sobrenome",
            Field::Company => "Nome da Empresa",
            Field::Phone => "Número de Telefone",
            Field::Crop => "Principal Cultura",
            Field::PropertySize => "Área Total (Hectares)",
            Field::Privacy => "Política de Privacidade",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Primary crop options. Closed set; the wire value is the lowercased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    #[serde(rename = "soja")]
    Soja,
    #[serde(rename = "milho")]
    Milho,
    #[serde(rename = "cana-de-açúcar")]
    CanaDeAcucar,
    #[serde(rename = "algodão")]
    Algodao,
    #[serde(rename = "café")]
    Cafe,
    #[serde(rename = "trigo")]
    Trigo,
    #[serde(rename = "feijão")]
    Feijao,
    #[serde(rename = "arroz")]
    Arroz,
    #[serde(rename = "pastagem")]
    Pastagem,
    #[serde(rename = "outros")]
    Outros,
}

impl Crop {
    pub const ALL: [Crop; 10] = [
        Crop::Soja,
        Crop::Milho,
        Crop::CanaDeAcucar,
        Crop::Algodao,
        Crop::Cafe,
        Crop::Trigo,
        Crop::Feijao,
        Crop::Arroz,
        Crop::Pastagem,
        Crop::Outros,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Crop::Soja => "Soja",
            Crop::Milho => "Milho",
            Crop::CanaDeAcucar => "Cana-de-açúcar",
            Crop::Algodao => "Algodão",
            Crop::Cafe => "Café",
            Crop::Trigo => "Trigo",
            Crop::Feijao => "Feijão",
            Crop::Arroz => "Arroz",
            Crop::Pastagem => "Pastagem",
            Crop::Outros => "Outros",
        }
    }

    /// Value submitted for the crop (`<option value>` and message body).
    pub fn value(self) -> &'static str {
        match self {
            Crop::Soja => "soja",
            Crop::Milho => "milho",
            Crop::CanaDeAcucar => "cana-de-açúcar",
            Crop::Algodao => "algodão",
            Crop::Cafe => "café",
            Crop::Trigo => "trigo",
            Crop::Feijao => "feijão",
            Crop::Arroz => "arroz",
            Crop::Pastagem => "pastagem",
            Crop::Outros => "outros",
        }
    }

    /// Parses a selected value. Case-insensitive, so labels are accepted too.
    pub fn from_value(raw: &str) -> Option<Crop> {
        let wanted = raw.trim().to_lowercase();
        Crop::ALL.into_iter().find(|crop| crop.value() == wanted)
    }
}

/// Property-size bracket, one of three mutually exclusive ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertySize {
    #[serde(rename = "ate-1000")]
    UpTo1000,
    #[serde(rename = "1001-2000")]
    From1001To2000,
    #[serde(rename = "acima-2000")]
    Above2000,
}

impl PropertySize {
    pub const ALL: [PropertySize; 3] = [
        PropertySize::UpTo1000,
        PropertySize::From1001To2000,
        PropertySize::Above2000,
    ];

    pub fn token(self) -> &'static str {
        match self {
            PropertySize::UpTo1000 => "ate-1000",
            PropertySize::From1001To2000 => "1001-2000",
            PropertySize::Above2000 => "acima-2000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertySize::UpTo1000 => "Até 1.000 ha",
            PropertySize::From1001To2000 => "De 1.001 a 2.000 ha",
            PropertySize::Above2000 => "Acima de 2.001 ha",
        }
    }

    /// Exact match on the bracket token; labels are not accepted.
    pub fn from_token(raw: &str) -> Option<PropertySize> {
        PropertySize::ALL
            .into_iter()
            .find(|size| size.token() == raw.trim())
    }
}

/// Raw, editable form state. Starts empty when the dialog opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub phone: String,
    /// Selected crop value, empty until the user picks one
    pub crop: String,
    /// Selected bracket token, empty until the user picks one
    pub property_size: String,
    pub privacy_accepted: bool,
}

impl LeadDraft {
    pub fn is_empty(&self) -> bool {
        *self == LeadDraft::default()
    }

    /// Text value of a field. The privacy checkbox has no text and yields `""`.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Crop => &self.crop,
            Field::PropertySize => &self.property_size,
            Field::Privacy => "",
        }
    }

    /// Mutable text slot of a field, `None` for the privacy checkbox.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Company => Some(&mut self.company),
            Field::Phone => Some(&mut self.phone),
            Field::Crop => Some(&mut self.crop),
            Field::PropertySize => Some(&mut self.property_size),
            Field::Privacy => None,
        }
    }
}

/// A request that passed every field rule. Built by [`crate::validate`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) company: Option<String>,
    pub(crate) phone: String,
    pub(crate) crop: Crop,
    pub(crate) property_size: PropertySize,
}

impl ValidLead {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    pub fn property_size(&self) -> PropertySize {
        self.property_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_values_are_lowercased_labels() {
        for crop in Crop::ALL {
            assert_eq!(crop.value(), crop.label().to_lowercase());
        }
    }

    #[test]
    fn crop_parsing_ignores_case() {
        assert_eq!(Crop::from_value("soja"), Some(Crop::Soja));
        assert_eq!(Crop::from_value("Cana-de-Açúcar"), Some(Crop::CanaDeAcucar));
        assert_eq!(Crop::from_value(" Café "), Some(Crop::Cafe));
        assert_eq!(Crop::from_value("banana"), None);
        assert_eq!(Crop::from_value(""), None);
    }

    #[test]
    fn crop_serializes_as_wire_value() {
        let json = serde_json::to_string(&Crop::Algodao).unwrap();
        assert_eq!(json, "\"algodão\"");
    }

    #[test]
    fn property_size_tokens() {
        assert_eq!(PropertySize::from_token("ate-1000"), Some(PropertySize::UpTo1000));
        assert_eq!(
            PropertySize::from_token("1001-2000"),
            Some(PropertySize::From1001To2000)
        );
        assert_eq!(PropertySize::from_token("acima-2000"), Some(PropertySize::Above2000));
        assert_eq!(PropertySize::from_token("Até 1.000 ha"), None);
        assert_eq!(PropertySize::from_token("acima-3000"), None);
    }

    #[test]
    fn draft_text_slots() {
        let mut draft = LeadDraft::default();
        assert!(draft.is_empty());

        if let Some(slot) = draft.text_mut(Field::Phone) {
            slot.push_str("16999999999");
        }
        assert_eq!(draft.text(Field::Phone), "16999999999");
        assert!(draft.text_mut(Field::Privacy).is_none());
        assert!(!draft.is_empty());
    }

    #[test]
    fn field_names_match_inputs() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "email",
                "nome",
                "sobrenome",
                "empresa",
                "telefone",
                "cultura",
                "hectares",
                "privacidade"
            ]
        );
        assert!(!Field::Company.is_required());
        assert!(Field::Privacy.is_required());
    }
}
