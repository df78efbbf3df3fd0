//! Full-submit validation.
//!
//! Validation is a pure function over the raw form values: it re-evaluates
//! every rule on every call and returns either the typed intake data or the
//! complete set of field errors. Because the error set is rebuilt from
//! scratch each run, a field that became valid carries no stale marker.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::types::{DocType, IntakeForm, MAX_FILE_SIZE, TranslationType, ValidatedIntake};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{8,15}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Every field a validation error can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Phone,
    Email,
    DocType,
    FromLang,
    ToLang,
    TranslationType,
    Pages,
    Deadline,
    Files,
    Consent,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FullName => "fullName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::DocType => "docType",
            Field::FromLang => "fromLang",
            Field::ToLang => "toLang",
            Field::TranslationType => "tType",
            Field::Pages => "pages",
            Field::Deadline => "deadline",
            Field::Files => "files",
            Field::Consent => "consent",
        };
        write!(f, "{name}")
    }
}

/// One error attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// The complete error set for one validation pass. Holds at most one
/// message per field; a later rule for the same field replaces the earlier
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message attached to a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.errors.push(FieldError { field, message }),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

const REQUIRED_MSG: &str = "This field is required.";

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the full form. Returns the typed intake data, or the complete
/// set of field errors for this pass.
pub fn validate(form: &IntakeForm) -> Result<ValidatedIntake, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let required: &[(Field, &str)] = &[
        (Field::FullName, &form.full_name),
        (Field::Phone, &form.phone),
        (Field::DocType, &form.doc_type),
        (Field::FromLang, &form.from_lang),
        (Field::ToLang, &form.to_lang),
        (Field::Pages, &form.pages),
        (Field::Deadline, &form.deadline),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.set(*field, REQUIRED_MSG);
        }
    }

    // Page count must be a positive integer
    let pages = form.pages.trim().parse::<u32>().ok().filter(|p| *p > 0);
    if !form.pages.trim().is_empty() && pages.is_none() {
        errors.set(Field::Pages, REQUIRED_MSG);
    }

    // Document type must come from the known set
    let doc_type = form.doc_type.parse::<DocType>().ok();
    if !form.doc_type.trim().is_empty() && doc_type.is_none() {
        errors.set(Field::DocType, "Please choose a document type.");
    }

    // Exactly one translation type must be selected
    let translation_type = form
        .translation_type
        .as_deref()
        .and_then(|t| t.parse::<TranslationType>().ok());
    if translation_type.is_none() {
        errors.set(Field::TranslationType, "Please select a type.");
    }

    if !form.consent {
        errors.set(Field::Consent, "You must agree.");
    }

    if form.files.is_empty() {
        errors.set(Field::Files, "Please add at least one file.");
    } else if let Some(oversized) = form.files.iter().find(|f| f.size > MAX_FILE_SIZE) {
        // First oversized file short-circuits with a message naming it
        errors.set(
            Field::Files,
            format!("File \"{}\" exceeds 50MB.", oversized.name),
        );
    }

    let phone = form.phone.trim();
    if !PHONE_RE.is_match(phone) {
        errors.set(
            Field::Phone,
            "Enter a valid phone number with country code.",
        );
    }

    // Email is optional, but must be well-formed when present
    if !form.email.trim().is_empty() && !EMAIL_RE.is_match(form.email.trim()) {
        errors.set(Field::Email, "Enter a valid email address.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All unwrapped values were checked above; an empty error set means
    // every parse succeeded.
    Ok(ValidatedIntake {
        full_name: form.full_name.trim().to_string(),
        phone: phone.to_string(),
        email: optional(&form.email),
        doc_type: doc_type.unwrap_or(DocType::Other),
        doc_other: optional(&form.doc_other),
        from_lang: form.from_lang.trim().to_string(),
        to_lang: form.to_lang.trim().to_string(),
        translation_type: translation_type.unwrap_or(TranslationType::General),
        authority: optional(&form.authority),
        pages: pages.unwrap_or(1),
        deadline: form.deadline.trim().to_string(),
        notes: optional(&form.notes),
        file_names: form.files.iter().map(|f| f.name.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttachedFile;

    fn valid_form() -> IntakeForm {
        IntakeForm {
            full_name: "Amal Haddad".to_string(),
            phone: "+971561234567".to_string(),
            email: "amal@example.com".to_string(),
            doc_type: "Contract".to_string(),
            doc_other: String::new(),
            from_lang: "Arabic".to_string(),
            to_lang: "English".to_string(),
            translation_type: Some("Certified".to_string()),
            authority: "Ministry of Justice".to_string(),
            pages: "3".to_string(),
            deadline: "2025-02-01".to_string(),
            notes: String::new(),
            files: vec![AttachedFile::new("contract.pdf", 1024)],
            consent: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let data = validate(&valid_form()).unwrap();
        assert_eq!(data.full_name, "Amal Haddad");
        assert_eq!(data.pages, 3);
        assert_eq!(data.doc_type, DocType::Contract);
        assert_eq!(data.translation_type, TranslationType::Certified);
        assert_eq!(data.file_names, vec!["contract.pdf"]);
        assert_eq!(data.notes, None);
    }

    #[test]
    fn test_each_required_field_gets_its_own_error() {
        let required = [
            Field::FullName,
            Field::Phone,
            Field::DocType,
            Field::FromLang,
            Field::ToLang,
            Field::Pages,
            Field::Deadline,
        ];
        for field in required {
            let mut form = valid_form();
            match field {
                Field::FullName => form.full_name.clear(),
                Field::Phone => form.phone.clear(),
                Field::DocType => form.doc_type.clear(),
                Field::FromLang => form.from_lang.clear(),
                Field::ToLang => form.to_lang.clear(),
                Field::Pages => form.pages.clear(),
                Field::Deadline => form.deadline.clear(),
                _ => unreachable!(),
            }
            let errors = validate(&form).unwrap_err();
            assert!(
                errors.get(field).is_some(),
                "expected an error attached to {field}"
            );
            assert_eq!(errors.len(), 1, "only {field} should carry an error");
        }
    }

    #[test]
    fn test_correcting_one_field_leaves_other_errors_alone() {
        let mut form = valid_form();
        form.full_name.clear();
        form.deadline.clear();
        let errors = validate(&form).unwrap_err();
        assert!(errors.get(Field::FullName).is_some());
        assert!(errors.get(Field::Deadline).is_some());

        form.full_name = "Amal Haddad".to_string();
        let errors = validate(&form).unwrap_err();
        assert!(errors.get(Field::FullName).is_none());
        assert!(errors.get(Field::Deadline).is_some());
    }

    #[test]
    fn test_pages_rejects_zero_negative_and_junk() {
        for bad in ["0", "-1", "three"] {
            let mut form = valid_form();
            form.pages = bad.to_string();
            let errors = validate(&form).unwrap_err();
            assert!(errors.get(Field::Pages).is_some(), "pages '{bad}'");
        }
        let mut form = valid_form();
        form.pages = "1".to_string();
        assert_eq!(validate(&form).unwrap().pages, 1);
    }

    #[test]
    fn test_phone_pattern() {
        let mut form = valid_form();
        form.phone = "+971561234567".to_string();
        assert!(validate(&form).is_ok());

        form.phone = "12345678".to_string();
        assert!(validate(&form).is_ok());

        form.phone = "12345".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::Phone),
            Some("Enter a valid phone number with country code.")
        );
    }

    #[test]
    fn test_email_optional_but_checked_when_present() {
        let mut form = valid_form();
        form.email = String::new();
        assert!(validate(&form).is_ok());

        form.email = "a@b".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Enter a valid email address."));

        form.email = "a@b.com".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_file_size_boundary() {
        let mut form = valid_form();
        form.files = vec![AttachedFile::new("exact.pdf", MAX_FILE_SIZE)];
        assert!(validate(&form).is_ok());

        form.files = vec![AttachedFile::new("big.pdf", MAX_FILE_SIZE + 1)];
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::Files),
            Some("File \"big.pdf\" exceeds 50MB.")
        );
    }

    #[test]
    fn test_first_oversized_file_named() {
        let mut form = valid_form();
        form.files = vec![
            AttachedFile::new("ok.pdf", 100),
            AttachedFile::new("huge-a.pdf", MAX_FILE_SIZE + 1),
            AttachedFile::new("huge-b.pdf", MAX_FILE_SIZE + 2),
        ];
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::Files),
            Some("File \"huge-a.pdf\" exceeds 50MB.")
        );
    }

    #[test]
    fn test_no_files_rejected() {
        let mut form = valid_form();
        form.files.clear();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Files), Some("Please add at least one file."));
    }

    #[test]
    fn test_consent_must_be_set() {
        let mut form = valid_form();
        form.consent = false;
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Consent), Some("You must agree."));
    }

    #[test]
    fn test_translation_type_must_be_selected() {
        let mut form = valid_form();
        form.translation_type = None;
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::TranslationType),
            Some("Please select a type.")
        );

        form.translation_type = Some("interpretive dance".to_string());
        let errors = validate(&form).unwrap_err();
        assert!(errors.get(Field::TranslationType).is_some());
    }

    #[test]
    fn test_unknown_doc_type_rejected() {
        let mut form = valid_form();
        form.doc_type = "Grimoire".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::DocType),
            Some("Please choose a document type.")
        );
    }

    #[test]
    fn test_empty_phone_reports_phone_message() {
        // The pattern check runs after the required check and replaces its
        // message for the same field.
        let mut form = valid_form();
        form.phone.clear();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get(Field::Phone),
            Some("Enter a valid phone number with country code.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_optional_fields_trim_to_none() {
        let mut form = valid_form();
        form.authority = "   ".to_string();
        form.notes = " rush job ".to_string();
        let data = validate(&form).unwrap();
        assert_eq!(data.authority, None);
        assert_eq!(data.notes.as_deref(), Some("rush job"));
    }
}
