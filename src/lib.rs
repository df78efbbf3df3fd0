pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod store;
pub mod ticket;
pub mod types;
pub mod validate;

pub use config::{BrandConfig, FALLBACK_ENDPOINT};
pub use controller::{IntakeController, SubmitError, SubmitOutcome};
pub use error::{IntakeError, Result};
pub use message::{ComposeError, build_message, compose_url, soft_validate};
pub use store::{JsonFileStore, STORE_FILE, TicketStore};
pub use ticket::{TICKET_ID_RE, generate_ticket_id, iso_timestamp};
pub use types::{
    AttachedFile, DocType, IntakeForm, IntakeRecord, MAX_FILE_SIZE, TranslationType,
    VALID_DOC_TYPES, VALID_TRANSLATION_TYPES, ValidatedIntake,
};
pub use validate::{Field, FieldError, ValidationErrors, validate};
