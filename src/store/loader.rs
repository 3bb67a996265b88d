//! Load an RDF document from disk into a [`VocabStore`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxrdf::{BlankNode, Literal, NamedNode, Subject, Term, Triple};
use rio_api::model as rio;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use rio_xml::RdfXmlParser;
use tracing::debug;

use super::VocabStore;
use crate::error::GenerationError;

/// Supported input serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
    RdfXml,
}

impl RdfFormat {
    /// Parse an explicit format token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "turtle" | "ttl" => Some(Self::Turtle),
            "ntriples" | "nt" => Some(Self::NTriples),
            "rdfxml" | "rdf" | "xml" | "owl" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_token(path.extension()?.to_str()?)
    }
}

/// Parse `path` into a store, auto-detecting the format from the file
/// extension unless one is given explicitly.
pub fn load_file(path: &Path, format: Option<RdfFormat>) -> Result<VocabStore, GenerationError> {
    let format = match format {
        Some(explicit) => explicit,
        None => RdfFormat::from_path(path)
            .ok_or_else(|| GenerationError::UnsupportedFormat(path.display().to_string()))?,
    };
    debug!("loading {} as {:?}", path.display(), format);

    let reader = BufReader::new(File::open(path)?);
    let store = match format {
        RdfFormat::Turtle => collect(TurtleParser::new(reader, None))?,
        RdfFormat::NTriples => collect(NTriplesParser::new(reader))?,
        RdfFormat::RdfXml => collect(RdfXmlParser::new(reader, None))?,
    };
    debug!("loaded {} triples", store.len());
    Ok(store)
}

fn collect<P>(mut parser: P) -> Result<VocabStore, GenerationError>
where
    P: TriplesParser,
    P::Error: std::fmt::Display,
{
    let mut store = VocabStore::new();
    let mut conversion: Option<GenerationError> = None;
    parser
        .parse_all(&mut |t: rio::Triple<'_>| -> Result<(), P::Error> {
            if conversion.is_none() {
                match convert_triple(&t) {
                    Ok(Some(triple)) => store.insert(triple),
                    Ok(None) => {}
                    Err(e) => conversion = Some(e),
                }
            }
            Ok(())
        })
        .map_err(|e| GenerationError::Parse(e.to_string()))?;
    match conversion {
        Some(e) => Err(e),
        None => Ok(store),
    }
}

/// Convert one rio triple to the oxrdf model. Embedded (RDF-star) triples
/// cannot name vocabulary terms and are skipped.
fn convert_triple(t: &rio::Triple<'_>) -> Result<Option<Triple>, GenerationError> {
    let subject = match t.subject {
        rio::Subject::NamedNode(n) => Subject::NamedNode(named_node(n.iri)?),
        rio::Subject::BlankNode(b) => Subject::BlankNode(BlankNode::new_unchecked(b.id)),
        _ => return Ok(None),
    };
    let predicate = named_node(t.predicate.iri)?;
    let object = match t.object {
        rio::Term::NamedNode(n) => Term::NamedNode(named_node(n.iri)?),
        rio::Term::BlankNode(b) => Term::BlankNode(BlankNode::new_unchecked(b.id)),
        rio::Term::Literal(rio::Literal::Simple { value }) => {
            Term::Literal(Literal::new_simple_literal(value))
        }
        rio::Term::Literal(rio::Literal::LanguageTaggedString { value, language }) => {
            Term::Literal(
                Literal::new_language_tagged_literal(value, language)
                    .map_err(|e| GenerationError::Parse(e.to_string()))?,
            )
        }
        rio::Term::Literal(rio::Literal::Typed { value, datatype }) => {
            Term::Literal(Literal::new_typed_literal(value, named_node(datatype.iri)?))
        }
        _ => return Ok(None),
    };
    Ok(Some(Triple::new(subject, predicate, object)))
}

fn named_node(iri: &str) -> Result<NamedNode, GenerationError> {
    NamedNode::new(iri).map_err(|e| GenerationError::Parse(e.to_string()))
}
