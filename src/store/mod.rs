//! In-memory triple store over one parsed vocabulary document.
//!
//! Owns the document's triples for the lifetime of a generation run and
//! answers the three queries extraction needs: distinct subjects, objects of
//! a (subject, predicate) pair, and wildcard pattern filtering.

pub mod loader;

use std::collections::HashSet;

use oxrdf::{Literal, NamedNodeRef, Subject, Term, Triple};

/// Queryable triple collection, immutable after loading.
#[derive(Debug, Default)]
pub struct VocabStore {
    triples: Vec<Triple>,
}

impl VocabStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Distinct subjects, in order of first appearance in the document.
    pub fn subjects(&self) -> Vec<&Subject> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for triple in &self.triples {
            if seen.insert(&triple.subject) {
                out.push(&triple.subject);
            }
        }
        out
    }

    /// All objects of (subject, predicate), in document order.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate.as_ref() == predicate)
            .map(|t| &t.object)
    }

    /// Literal objects of (subject, predicate), optionally narrowed to one
    /// language tag.
    pub fn literals<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: NamedNodeRef<'a>,
        language: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Literal> + 'a {
        self.objects(subject, predicate)
            .filter_map(|o| match o {
                Term::Literal(literal) => Some(literal),
                _ => None,
            })
            .filter(move |l| match language {
                Some(tag) => l
                    .language()
                    .is_some_and(|found| found.eq_ignore_ascii_case(tag)),
                None => true,
            })
    }

    /// Triples matching a pattern; `None` is a wildcard position.
    pub fn filter<'a>(
        &'a self,
        subject: Option<&'a Subject>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.is_none_or(|s| &t.subject == s)
                && predicate.is_none_or(|p| t.predicate.as_ref() == p)
                && object.is_none_or(|o| &t.object == o)
        })
    }
}
