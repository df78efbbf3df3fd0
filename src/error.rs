use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("unknown document type '{0}'")]
    InvalidDocType(String),

    #[error("unknown translation type '{0}'")]
    InvalidTranslationType(String),

    #[error("could not determine a data directory for the record store")]
    DataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
