//! Language-neutral term table produced by extraction and consumed by every
//! backend emitter.

/// One vocabulary term, derived fresh each run.
#[derive(Debug, Clone)]
pub struct Term {
    /// Suffix of the term IRI after the namespace prefix.
    pub local_name: String,
    /// Full term IRI. Always equals namespace prefix + local name.
    pub iri: String,
    /// Best label literal after language negotiation.
    pub label: Option<String>,
    /// Best comment literal after language negotiation.
    pub comment: Option<String>,
    /// `rdfs:seeAlso` references, IRIs only.
    pub see_also: Vec<String>,
}

/// The resolved vocabulary: header metadata plus the term table in
/// canonical emission order (case-insensitive ascending by local name).
#[derive(Debug, Clone)]
pub struct ResolvedVocabulary {
    /// Display name, e.g. "FOAF".
    pub name: String,
    /// Namespace prefix IRI.
    pub prefix: String,
    /// Vocabulary title resolved from the prefix IRI's own metadata.
    pub title: Option<String>,
    /// Vocabulary description resolved from the prefix IRI's own metadata.
    pub description: Option<String>,
    /// Vocabulary-level `rdfs:seeAlso` references, IRIs only.
    pub see_also: Vec<String>,
    /// Terms in canonical emission order.
    pub terms: Vec<Term>,
}
