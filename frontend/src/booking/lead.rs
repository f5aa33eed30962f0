use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Every input of the booking form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Mobile,
    Email,
    Pincode,
    Address,
    TermsAccepted,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Mobile,
        Field::Email,
        Field::Pincode,
        Field::Address,
        Field::TermsAccepted,
    ];

    /// Name used for the `name`/`id` attribute of the input and in the JSON payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Pincode => "pincode",
            Field::Address => "address",
            Field::TermsAccepted => "termsAccepted",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

/// Raw value coming out of an input element.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(checked) => if checked { "true".to_string() } else { String::new() },
        }
    }

    fn into_checked(self) -> bool {
        match self {
            FieldValue::Checked(checked) => checked,
            FieldValue::Text(text) => matches!(text.trim(), "true" | "on" | "1"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub pincode: String,
    pub address: String,
    pub terms_accepted: bool,
}

impl LeadRecord {
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Name => self.name = value.into_text(),
            Field::Mobile => self.mobile = value.into_text(),
            Field::Email => self.email = value.into_text(),
            Field::Pincode => self.pincode = value.into_text(),
            Field::Address => self.address = value.into_text(),
            Field::TermsAccepted => self.terms_accepted = value.into_checked(),
        }
    }

    /// Runs every required-field rule and collects the messages of the ones that fail.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }

        if self.mobile.trim().is_empty() {
            errors.insert(Field::Mobile, "Mobile number is required");
        } else if !is_valid_mobile(&self.mobile) {
            errors.insert(Field::Mobile, INVALID_MOBILE);
        }

        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, "Enter a valid email address");
        }

        if self.pincode.trim().is_empty() {
            errors.insert(Field::Pincode, "Pincode is required");
        } else if !PINCODE_RE.is_match(&self.pincode) {
            errors.insert(Field::Pincode, "Enter a valid 6-digit Indian pincode");
        }

        if !self.terms_accepted {
            errors.insert(Field::TermsAccepted, "You must accept the terms and conditions");
        }

        errors
    }

    /// Stamps the record with the current UTC time, ready for the submission collaborator.
    pub fn stamp(&self) -> SubmittedLead {
        SubmittedLead {
            lead: self.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub const INVALID_MOBILE: &str = "Enter a valid 10-digit Indian mobile number";

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
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
}

/// What the submission collaborator receives: the record plus an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedLead {
    #[serde(flatten)]
    pub lead: LeadRecord,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> LeadRecord {
        LeadRecord {
            name: "Asha Rao".to_string(),
            mobile: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            pincode: "560001".to_string(),
            address: String::new(),
            terms_accepted: true,
        }
    }

    #[test]
    fn complete_record_has_no_errors() {
        assert!(complete().validate().is_empty());
    }

    #[test]
    fn empty_record_reports_every_required_field() {
        let errors = LeadRecord::default().validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Mobile), Some("Mobile number is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Pincode), Some("Pincode is required"));
        assert_eq!(errors.get(Field::TermsAccepted), Some("You must accept the terms and conditions"));
        assert!(!errors.contains(Field::Address));
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut lead = complete();
        lead.name = "   ".to_string();
        assert_eq!(lead.validate().get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn mobile_rules() {
        for bad in ["1234567890", "987654321", "98765432101", "98765x3210", "+919876543210"] {
            let mut lead = complete();
            lead.mobile = bad.to_string();
            assert_eq!(lead.validate().get(Field::Mobile), Some(INVALID_MOBILE), "{bad}");
        }
        for good in ["6000000000", "7123456789", "8999999999", "9876543210"] {
            assert!(is_valid_mobile(good), "{good}");
        }
    }

    #[test]
    fn only_ascii_digits_count() {
        let mut lead = complete();
        lead.mobile = "9२३४५६७८९०".to_string();
        lead.pincode = "५६०००१".to_string();
        assert!(!is_valid_mobile(&lead.mobile));
        let errors = lead.validate();
        assert_eq!(errors.get(Field::Mobile), Some(INVALID_MOBILE));
        assert_eq!(errors.get(Field::Pincode), Some("Enter a valid 6-digit Indian pincode"));
    }

    #[test]
    fn email_rules() {
        let mut lead = complete();
        lead.email = "asha@example".to_string();
        assert_eq!(lead.validate().get(Field::Email), Some("Enter a valid email address"));
        lead.email = "a@b.c".to_string();
        assert!(lead.validate().is_empty());
    }

    #[test]
    fn pincode_rules() {
        let mut lead = complete();
        for bad in ["56000", "5600011", "56o001"] {
            lead.pincode = bad.to_string();
            assert_eq!(
                lead.validate().get(Field::Pincode),
                Some("Enter a valid 6-digit Indian pincode"),
                "{bad}"
            );
        }
    }

    #[test]
    fn address_is_never_validated() {
        let mut lead = complete();
        lead.address = String::new();
        assert!(lead.validate().is_empty());
    }

    #[test]
    fn checkbox_values_are_coerced() {
        let mut lead = LeadRecord::default();
        lead.set(Field::TermsAccepted, FieldValue::Text("on".to_string()));
        assert!(lead.terms_accepted);
        lead.set(Field::TermsAccepted, false.into());
        assert!(!lead.terms_accepted);
        lead.set(Field::Name, true.into());
        assert_eq!(lead.name, "true");
    }

    #[test]
    fn submitted_lead_serializes_flat_with_camel_case() {
        let submitted = complete().stamp();
        assert!(submitted.timestamp.ends_with('Z'));
        let value = serde_json::to_value(&submitted).unwrap();
        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["termsAccepted"], true);
        assert_eq!(value["timestamp"], submitted.timestamp.as_str());
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }
}
