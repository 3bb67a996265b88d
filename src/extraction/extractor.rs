//! Vocabulary extraction: namespace resolution, term partitioning and
//! metadata lookup.
//!
//! [`extract`] runs the whole pipeline and returns the language-neutral
//! [`ResolvedVocabulary`]; emitters never touch the store again.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use oxrdf::{Literal, NamedNode, NamedNodeRef, Subject, Term as RdfTerm};
use tracing::{debug, warn};

use crate::config::{CollisionPolicy, GenerationConfig};
use crate::error::GenerationError;
use crate::model::term::{ResolvedVocabulary, Term};
use crate::model::vocabulary::{rdfs, vann, COMMENT_PROPERTIES, LABEL_PROPERTIES};
use crate::store::VocabStore;

/// Resolve the vocabulary namespace prefix: an explicit configuration value
/// wins, otherwise the document's own `vann:preferredNamespaceUri`
/// declaration is used.
pub fn resolve_prefix(
    store: &VocabStore,
    config: &GenerationConfig,
) -> Result<String, GenerationError> {
    if let Some(prefix) = config.prefix.as_deref() {
        if !prefix.trim().is_empty() {
            return Ok(prefix.to_string());
        }
    }
    for triple in store.filter(None, Some(vann::PREFERRED_NAMESPACE_URI), None) {
        if let RdfTerm::Literal(literal) = &triple.object {
            let value = literal.value();
            if !value.trim().is_empty() {
                debug!("detected prefix {value} from vann:preferredNamespaceUri");
                return Ok(value.to_string());
            }
        }
    }
    Err(GenerationError::MissingPrefix)
}

/// Partition the store's IRI subjects under `prefix` into a local-name
/// keyed map. The local name is everything after the first occurrence of
/// the prefix inside the subject IRI, so distinct IRIs can reduce to the
/// same key. The first IRI seen for a key wins; every later IRI mapping to
/// the same key is dropped with a warning, or aborts the run under
/// [`CollisionPolicy::Fail`].
pub fn split_subjects(
    store: &VocabStore,
    prefix: &str,
    policy: CollisionPolicy,
) -> Result<BTreeMap<String, String>, GenerationError> {
    let mut split = BTreeMap::new();
    for subject in store.subjects() {
        let Subject::NamedNode(node) = subject else {
            continue;
        };
        let iri = node.as_str();
        let Some(position) = iri.find(prefix) else {
            continue;
        };
        let local = &iri[position + prefix.len()..];
        if local.is_empty() {
            continue;
        }
        match split.entry(local.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(iri.to_string());
            }
            Entry::Occupied(slot) => {
                let kept = slot.get();
                match policy {
                    CollisionPolicy::Warn => {
                        warn!("conflicting keys found: uri={iri} key={local} existing={kept}");
                    }
                    CollisionPolicy::Fail => {
                        return Err(GenerationError::DuplicateLocalName {
                            iri: iri.to_string(),
                            key: local.to_string(),
                            kept: kept.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(split)
}

/// Sort local names into the canonical emission order: case-insensitive
/// ascending, with a case-sensitive tie-break so reruns are byte-identical.
pub fn sorted_keys(split: &BTreeMap<String, String>) -> Vec<&String> {
    let mut keys: Vec<&String> = split.keys().collect();
    keys.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    keys
}

/// Return the best literal for `subject` among `properties` in priority
/// order: within one property's results an exact `preferred_language` tag
/// match wins, else the first literal found for that property; the first
/// property yielding anything ends the search.
pub fn first_existing_object_literal(
    store: &VocabStore,
    subject: &Subject,
    preferred_language: Option<&str>,
    properties: &[NamedNodeRef<'_>],
) -> Option<Literal> {
    for property in properties {
        let literals: Vec<&Literal> = store.literals(subject, *property, None).collect();
        if literals.is_empty() {
            continue;
        }
        if let Some(tag) = preferred_language {
            if let Some(exact) = literals
                .iter()
                .find(|l| l.language().is_some_and(|found| found.eq_ignore_ascii_case(tag)))
            {
                return Some((*exact).clone());
            }
        }
        return literals.first().map(|l| (*l).clone());
    }
    None
}

/// `rdfs:seeAlso` objects of `subject`, keeping IRIs only.
fn see_also_iris(store: &VocabStore, subject: &Subject) -> Vec<String> {
    store
        .objects(subject, rdfs::SEE_ALSO)
        .filter_map(|object| match object {
            RdfTerm::NamedNode(node) => Some(node.as_str().to_string()),
            _ => None,
        })
        .collect()
}

/// Run the full extraction pipeline.
///
/// `fallback_name` supplies the vocabulary display name when the
/// configuration leaves it blank (by convention the output file stem).
pub fn extract(
    store: &VocabStore,
    config: &GenerationConfig,
    fallback_name: &str,
) -> Result<ResolvedVocabulary, GenerationError> {
    let name = config
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    let prefix = resolve_prefix(store, config)?;
    debug!("prefix: {prefix}");

    let split = split_subjects(store, &prefix, config.collision_policy)?;
    let keys = sorted_keys(&split);
    let preferred = config.preferred_language.as_deref();

    // Vocabulary-level metadata hangs off the prefix IRI itself.
    let prefix_subject = Subject::NamedNode(NamedNode::new_unchecked(prefix.clone()));
    let title = first_existing_object_literal(store, &prefix_subject, preferred, &LABEL_PROPERTIES)
        .map(|l| l.value().to_string());
    let description =
        first_existing_object_literal(store, &prefix_subject, preferred, &COMMENT_PROPERTIES)
            .map(|l| l.value().to_string());
    let see_also = see_also_iris(store, &prefix_subject);

    let mut terms = Vec::with_capacity(keys.len());
    for key in keys {
        let iri = &split[key];
        let subject = Subject::NamedNode(NamedNode::new_unchecked(iri.clone()));
        let label = first_existing_object_literal(store, &subject, preferred, &LABEL_PROPERTIES)
            .map(|l| l.value().to_string());
        let comment =
            first_existing_object_literal(store, &subject, preferred, &COMMENT_PROPERTIES)
                .map(|l| l.value().to_string());
        terms.push(Term {
            local_name: key.clone(),
            iri: iri.clone(),
            label,
            comment,
            see_also: see_also_iris(store, &subject),
        });
    }

    Ok(ResolvedVocabulary {
        name,
        prefix,
        title,
        description,
        see_also,
        terms,
    })
}
