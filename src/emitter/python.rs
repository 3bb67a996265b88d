//! Python backend: renders the vocabulary as a class with one attribute
//! per term.

use std::io::{self, Write};

use super::{build_rows, write_wrapped, VocabEmitter};
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::model::term::{ResolvedVocabulary, Term};

const INDENT: &str = "    ";

/// Python keywords; attribute names must not shadow them.
pub const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Emits `class <Class>:` with a docstring and constant attributes.
pub struct PythonEmitter<W: Write> {
    out: W,
}

impl<W: Write> PythonEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_term_doc(out: &mut W, term: &Term) -> io::Result<()> {
        if let Some(label) = &term.label {
            write_wrapped(out, &format!("{INDENT}# "), label, false)?;
        }
        writeln!(out, "{INDENT}# {}.", term.iri)?;
        if let Some(comment) = &term.comment {
            write_wrapped(out, &format!("{INDENT}# "), comment, false)?;
        }
        for iri in &term.see_also {
            writeln!(out, "{INDENT}# See: {iri}")?;
        }
        Ok(())
    }
}

fn escape_double(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<W: Write> VocabEmitter for PythonEmitter<W> {
    fn emit(
        &mut self,
        class_name: &str,
        config: &GenerationConfig,
        vocab: &ResolvedVocabulary,
    ) -> Result<(), GenerationError> {
        let rows = build_rows(class_name, config, vocab, RESERVED_WORDS)?;
        let out = &mut self.out;

        writeln!(out, "class {class_name}:")?;
        writeln!(out, "{INDENT}\"\"\"")?;
        if let Some(title) = &vocab.title {
            write_wrapped(out, INDENT, title, true)?;
            writeln!(out)?;
        }
        if let Some(description) = &vocab.description {
            write_wrapped(out, INDENT, description, true)?;
            writeln!(out)?;
        }
        writeln!(out, "{INDENT}Namespace {}.", vocab.name)?;
        writeln!(out, "{INDENT}Prefix: <{}>", vocab.prefix)?;
        if !vocab.see_also.is_empty() {
            writeln!(out)?;
            for iri in &vocab.see_also {
                writeln!(out, "{INDENT}See: {iri}")?;
            }
        }
        writeln!(out, "{INDENT}\"\"\"")?;
        writeln!(out)?;

        writeln!(out, "{INDENT}# {}", vocab.prefix)?;
        writeln!(
            out,
            "{INDENT}NAMESPACE = \"{}\"",
            escape_double(&vocab.prefix)
        )?;
        writeln!(out)?;
        writeln!(out, "{INDENT}# {}", vocab.name.to_lowercase())?;
        writeln!(
            out,
            "{INDENT}PREFIX = \"{}\"",
            escape_double(&vocab.name.to_lowercase())
        )?;
        writeln!(out)?;

        for row in &rows {
            if let Some(string_ident) = &row.string_ident {
                Self::write_term_doc(out, row.term)?;
                writeln!(
                    out,
                    "{INDENT}{string_ident} = \"{}\"",
                    escape_double(&row.term.local_name)
                )?;
                writeln!(out)?;
            }
        }

        for row in &rows {
            Self::write_term_doc(out, row.term)?;
            writeln!(
                out,
                "{INDENT}{} = NAMESPACE + \"{}\"",
                row.ident,
                escape_double(&row.term.local_name)
            )?;
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}
