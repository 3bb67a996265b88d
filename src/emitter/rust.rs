//! Rust backend: renders the vocabulary as a flat module of `pub const`
//! string slices, one per term.

use std::io::{self, Write};

use super::{build_rows, write_wrapped, VocabEmitter};
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::model::term::{ResolvedVocabulary, Term};

/// Rust keywords, strict and reserved.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "union", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
];

/// Emits a standalone module file: `//!` header docs followed by
/// `pub const` declarations.
pub struct RustEmitter<W: Write> {
    out: W,
}

impl<W: Write> RustEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_term_doc(out: &mut W, term: &Term) -> io::Result<()> {
        if let Some(label) = &term.label {
            write_wrapped(out, "/// ", label, false)?;
            writeln!(out, "///")?;
        }
        writeln!(out, "/// <{}>", term.iri)?;
        if let Some(comment) = &term.comment {
            writeln!(out, "///")?;
            write_wrapped(out, "/// ", comment, false)?;
        }
        for iri in &term.see_also {
            writeln!(out, "/// See: <{iri}>")?;
        }
        Ok(())
    }
}

fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<W: Write> VocabEmitter for RustEmitter<W> {
    fn emit(
        &mut self,
        class_name: &str,
        config: &GenerationConfig,
        vocab: &ResolvedVocabulary,
    ) -> Result<(), GenerationError> {
        let rows = build_rows(class_name, config, vocab, RESERVED_WORDS)?;
        let out = &mut self.out;

        if let Some(title) = &vocab.title {
            write_wrapped(out, "//! ", title, true)?;
            writeln!(out, "//!")?;
        }
        if let Some(description) = &vocab.description {
            write_wrapped(out, "//! ", description, true)?;
            writeln!(out, "//!")?;
        }
        writeln!(out, "//! Namespace {}.", vocab.name)?;
        writeln!(out, "//! Prefix: `<{}>`", vocab.prefix)?;
        if !vocab.see_also.is_empty() {
            writeln!(out, "//!")?;
            for iri in &vocab.see_also {
                writeln!(out, "//! See: <{iri}>")?;
            }
        }
        writeln!(out)?;

        writeln!(out, "/// <{}>", vocab.prefix)?;
        writeln!(
            out,
            "pub const NAMESPACE: &str = \"{}\";",
            escape_literal(&vocab.prefix)
        )?;
        writeln!(out)?;
        writeln!(out, "/// Short prefix of the vocabulary.")?;
        writeln!(
            out,
            "pub const PREFIX: &str = \"{}\";",
            escape_literal(&vocab.name.to_lowercase())
        )?;
        writeln!(out)?;

        for row in &rows {
            if let Some(string_ident) = &row.string_ident {
                Self::write_term_doc(out, row.term)?;
                writeln!(
                    out,
                    "pub const {string_ident}: &str = \"{}\";",
                    escape_literal(&row.term.local_name)
                )?;
                writeln!(out)?;
            }
        }

        for row in &rows {
            Self::write_term_doc(out, row.term)?;
            // Constant folding at generation time: prefix + raw local name.
            writeln!(
                out,
                "pub const {}: &str = \"{}{}\";",
                row.ident,
                escape_literal(&vocab.prefix),
                escape_literal(&row.term.local_name)
            )?;
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}
