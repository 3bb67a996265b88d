//! Generate vocabulary constant source files from RDF ontologies.
//!
//! The pipeline loads a vocabulary document into a [`store::VocabStore`],
//! resolves the namespace prefix and partitions subjects into terms
//! ([`extraction::extractor`]), then renders the sorted term table through
//! a target-language backend ([`emitter`]).

pub mod config;
pub mod emitter;
pub mod error;
pub mod extraction;
pub mod model;
pub mod store;
