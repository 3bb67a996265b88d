//! Backend emitters rendering a resolved vocabulary into target-language
//! source text.
//!
//! One shared pipeline formats and collision-checks identifiers
//! ([`build_rows`]); each backend is a small rendering strategy over the
//! resulting rows and never re-queries the triple store.

pub mod javascript;
pub mod python;
pub mod rust;

use std::io::{self, Write};

use crate::config::{CaseConvention, GenerationConfig};
use crate::error::GenerationError;
use crate::extraction::ident::{self, FieldGuard};
use crate::model::term::{ResolvedVocabulary, Term};

/// Column at which doc comments wrap.
pub const WRAP_COLUMN: usize = 70;

/// Contract every target-language backend fulfills. `emit` is a pure
/// function of its inputs; identifier collisions surface as
/// [`GenerationError::FieldCollision`] before a single byte is written.
pub trait VocabEmitter {
    /// Render the complete source file for `vocab` under `class_name`.
    fn emit(
        &mut self,
        class_name: &str,
        config: &GenerationConfig,
        vocab: &ResolvedVocabulary,
    ) -> Result<(), GenerationError>;
}

/// One term with its formatted identifiers.
pub struct ConstantRow<'a> {
    pub term: &'a Term,
    /// Identifier of the term constant (full-IRI value).
    pub ident: String,
    /// Identifier of the bare local-name string constant, present iff the
    /// string block is enabled.
    pub string_ident: Option<String>,
}

/// Format and collision-check the identifiers of every term, in canonical
/// order. One [`FieldGuard`] spans both constant blocks, so a string
/// constant clashing with a term constant is rejected too.
pub fn build_rows<'a>(
    class_name: &str,
    config: &GenerationConfig,
    vocab: &'a ResolvedVocabulary,
    reserved: &[&str],
) -> Result<Vec<ConstantRow<'a>>, GenerationError> {
    let mut guard = FieldGuard::new();
    let string_block = config.string_block_enabled();

    let mut string_idents = Vec::new();
    if string_block {
        let convention = config.string_case.unwrap_or(CaseConvention::Unmodified);
        for term in &vocab.terms {
            let raw = format!(
                "{}{}{}",
                config.string_prefix.as_deref().unwrap_or(""),
                ident::format(&term.local_name, convention),
                config.string_suffix.as_deref().unwrap_or("")
            );
            let field = ident::clean(&raw, reserved);
            guard.check(class_name, &field)?;
            string_idents.push(field);
        }
    }

    let mut rows = Vec::with_capacity(vocab.terms.len());
    for (i, term) in vocab.terms.iter().enumerate() {
        let field = ident::clean(&ident::format(&term.local_name, config.constant_case), reserved);
        guard.check(class_name, &field)?;
        rows.push(ConstantRow {
            term,
            ident: field,
            string_ident: string_block.then(|| string_idents[i].clone()),
        });
    }
    Ok(rows)
}

/// Collapse whitespace runs and wrap at [`WRAP_COLUMN`]. Words longer than
/// the column are kept whole on their own line.
pub fn wrap(text: &str) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in collapsed.split(' ') {
        if word.is_empty() {
            continue;
        }
        if !line.is_empty() && line.len() + 1 + word.len() > WRAP_COLUMN {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Write `text` wrapped, one line per row, each preceded by `prefix`.
/// `period` closes the final line with a full stop.
pub(crate) fn write_wrapped<W: Write>(
    out: &mut W,
    prefix: &str,
    text: &str,
    period: bool,
) -> io::Result<()> {
    let lines = wrap(text);
    for (i, line) in lines.iter().enumerate() {
        if period && i + 1 == lines.len() && !line.ends_with('.') {
            writeln!(out, "{prefix}{line}.")?;
        } else {
            writeln!(out, "{prefix}{line}")?;
        }
    }
    Ok(())
}
