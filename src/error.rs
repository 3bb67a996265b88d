//! Error types for vocabulary generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("failed to parse input document: {0}")]
    Parse(String),

    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),

    #[error("could not detect prefix, please set explicitly")]
    MissingPrefix,

    #[error("conflicting keys found: uri={iri} key={key} existing={kept}")]
    DuplicateLocalName {
        iri: String,
        key: String,
        kept: String,
    },

    #[error("field collision in {container}: '{field}' is already defined")]
    FieldCollision { container: String, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
