use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{IntakeError, Result};

/// Maximum size for a single attached file (50 MiB).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    Passport,
    #[serde(rename = "Birth Certificate")]
    BirthCertificate,
    #[serde(rename = "Marriage Certificate")]
    MarriageCertificate,
    #[serde(rename = "Academic Record")]
    AcademicRecord,
    Contract,
    #[serde(rename = "Legal Document")]
    LegalDocument,
    Other,
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocType::Passport => write!(f, "Passport"),
            DocType::BirthCertificate => write!(f, "Birth Certificate"),
            DocType::MarriageCertificate => write!(f, "Marriage Certificate"),
            DocType::AcademicRecord => write!(f, "Academic Record"),
            DocType::Contract => write!(f, "Contract"),
            DocType::LegalDocument => write!(f, "Legal Document"),
            DocType::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for DocType {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "passport" => Ok(DocType::Passport),
            "birth certificate" => Ok(DocType::BirthCertificate),
            "marriage certificate" => Ok(DocType::MarriageCertificate),
            "academic record" => Ok(DocType::AcademicRecord),
            "contract" => Ok(DocType::Contract),
            "legal document" => Ok(DocType::LegalDocument),
            "other" => Ok(DocType::Other),
            _ => Err(IntakeError::InvalidDocType(s.to_string())),
        }
    }
}

pub const VALID_DOC_TYPES: &[&str] = &[
    "Passport",
    "Birth Certificate",
    "Marriage Certificate",
    "Academic Record",
    "Contract",
    "Legal Document",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationType {
    Certified,
    Legal,
    General,
}

impl fmt::Display for TranslationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationType::Certified => write!(f, "Certified"),
            TranslationType::Legal => write!(f, "Legal"),
            TranslationType::General => write!(f, "General"),
        }
    }
}

impl FromStr for TranslationType {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "certified" => Ok(TranslationType::Certified),
            "legal" => Ok(TranslationType::Legal),
            "general" => Ok(TranslationType::General),
            _ => Err(IntakeError::InvalidTranslationType(s.to_string())),
        }
    }
}

pub const VALID_TRANSLATION_TYPES: &[&str] = &["Certified", "Legal", "General"];

/// An attached file, referenced by name and size only. File bytes are never
/// read or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub size: u64,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        AttachedFile {
            name: name.into(),
            size,
        }
    }

    /// Reference an existing file on disk: takes its name and size from
    /// metadata without reading any content.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = fs::metadata(path)?.len();
        Ok(AttachedFile { name, size })
    }
}

/// Raw field values as entered, before any validation. All textual fields
/// hold whatever the user typed; `translation_type` is `None` while no
/// option has been selected.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub doc_type: String,
    pub doc_other: String,
    pub from_lang: String,
    pub to_lang: String,
    pub translation_type: Option<String>,
    pub authority: String,
    pub pages: String,
    pub deadline: String,
    pub notes: String,
    pub files: Vec<AttachedFile>,
    pub consent: bool,
}

impl IntakeForm {
    /// Reset every field to its empty default, including the conditional
    /// "other document" description.
    pub fn clear(&mut self) {
        *self = IntakeForm::default();
    }
}

/// Typed result of a successful full validation.
#[derive(Debug, Clone)]
pub struct ValidatedIntake {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub doc_type: DocType,
    pub doc_other: Option<String>,
    pub from_lang: String,
    pub to_lang: String,
    pub translation_type: TranslationType,
    pub authority: Option<String>,
    pub pages: u32,
    pub deadline: String,
    pub notes: Option<String>,
    pub file_names: Vec<String>,
}

/// The persisted representation of one submitted request. Records are
/// append-only: never updated or removed once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub ticket_id: String,

    pub full_name: String,

    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub doc_type: DocType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_other: Option<String>,

    pub from_lang: String,

    pub to_lang: String,

    #[serde(rename = "tType")]
    pub translation_type: TranslationType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    pub pages: u32,

    pub deadline: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub file_names: Vec<String>,

    pub created_at: String,
}

impl IntakeRecord {
    /// Build the record for one accepted submission.
    pub fn new(ticket_id: String, data: ValidatedIntake, created_at: String) -> Self {
        IntakeRecord {
            ticket_id,
            full_name: data.full_name,
            phone: data.phone,
            email: data.email,
            doc_type: data.doc_type,
            doc_other: data.doc_other,
            from_lang: data.from_lang,
            to_lang: data.to_lang,
            translation_type: data.translation_type,
            authority: data.authority,
            pages: data.pages,
            deadline: data.deadline,
            notes: data.notes,
            file_names: data.file_names,
            created_at,
        }
    }
}
