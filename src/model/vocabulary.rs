//! Well-known RDF namespace constants consulted during extraction.
//!
//! - `rdfs:` / `dc11:` / `dcterms:` / `skos:` -- documentation properties
//! - `vann:` -- vocabulary annotation conventions (prefix detection)

use oxrdf::NamedNodeRef;

/// RDF Schema
pub mod rdfs {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
    pub const COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
    pub const SEE_ALSO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#seeAlso");
}

/// Dublin Core 1.1 elements
pub mod dc11 {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/title");
    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/description");
}

/// Dublin Core terms
pub mod dcterms {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
}

/// SKOS core
pub mod skos {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const PREF_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
    pub const ALT_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#altLabel");
    pub const DEFINITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#definition");
    pub const NOTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#note");
}

/// Vocabulary annotation conventions
pub mod vann {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://purl.org/vocab/vann/";
    pub const PREFERRED_NAMESPACE_URI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/vocab/vann/preferredNamespaceUri");
    pub const PREFERRED_NAMESPACE_PREFIX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/vocab/vann/preferredNamespacePrefix");
}

/// Candidate label properties, in priority order. The first property that
/// yields any literal wins.
pub const LABEL_PROPERTIES: [NamedNodeRef<'static>; 5] = [
    rdfs::LABEL,
    dcterms::TITLE,
    dc11::TITLE,
    skos::PREF_LABEL,
    skos::ALT_LABEL,
];

/// Candidate comment properties, in priority order.
pub const COMMENT_PROPERTIES: [NamedNodeRef<'static>; 5] = [
    rdfs::COMMENT,
    dcterms::DESCRIPTION,
    skos::DEFINITION,
    skos::NOTE,
    dc11::DESCRIPTION,
];
