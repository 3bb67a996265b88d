//! JavaScript backend: renders the vocabulary as an object literal with a
//! default export, one property per term.

use std::io::{self, Write};

use super::{build_rows, write_wrapped, VocabEmitter};
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::model::term::{ResolvedVocabulary, Term};

const INDENT: &str = "    ";

/// Identifiers the cleaner must keep generated property names away from.
pub const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "export",
    "extends", "false", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "var",
    "void", "while", "with", "yield",
];

/// Emits `const <Class> = { ... }; export default <Class>;`.
pub struct JavascriptEmitter<W: Write> {
    out: W,
}

impl<W: Write> JavascriptEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_term_doc(out: &mut W, term: &Term) -> io::Result<()> {
        writeln!(out, "{INDENT}/**")?;
        if let Some(label) = &term.label {
            write_wrapped(out, &format!("{INDENT} * "), label, false)?;
            writeln!(out, "{INDENT} * <p>")?;
        }
        writeln!(out, "{INDENT} * {}.", term.iri)?;
        if let Some(comment) = &term.comment {
            write_wrapped(out, &format!("{INDENT} * "), comment, false)?;
        }
        for iri in &term.see_also {
            writeln!(out, "{INDENT} * @see <a href=\"{iri}\">{iri}</a>")?;
        }
        writeln!(out, "{INDENT} */")
    }
}

fn escape_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

impl<W: Write> VocabEmitter for JavascriptEmitter<W> {
    fn emit(
        &mut self,
        class_name: &str,
        config: &GenerationConfig,
        vocab: &ResolvedVocabulary,
    ) -> Result<(), GenerationError> {
        let rows = build_rows(class_name, config, vocab, RESERVED_WORDS)?;
        let out = &mut self.out;

        writeln!(out, "const NAMESPACE = '{}';", escape_single(&vocab.prefix))?;
        writeln!(out)?;

        writeln!(out, "/**")?;
        if let Some(title) = &vocab.title {
            write_wrapped(out, " * ", title, true)?;
            writeln!(out, " * <p>")?;
        }
        if let Some(description) = &vocab.description {
            write_wrapped(out, " * ", description, true)?;
            writeln!(out, " * <p>")?;
        }
        writeln!(out, " * Namespace {}.", vocab.name)?;
        writeln!(out, " * Prefix: {{@code <{}>}}", vocab.prefix)?;
        if !vocab.see_also.is_empty() {
            writeln!(out, " *")?;
            for iri in &vocab.see_also {
                writeln!(out, " * @see <a href=\"{iri}\">{iri}</a>")?;
            }
        }
        writeln!(out, " */")?;
        writeln!(out, "const {class_name} = {{")?;
        writeln!(out)?;

        writeln!(out, "{INDENT}NAMESPACE: '{}',", escape_single(&vocab.prefix))?;
        writeln!(out)?;
        writeln!(
            out,
            "{INDENT}PREFIX: '{}',",
            escape_single(&vocab.name.to_lowercase())
        )?;
        writeln!(out)?;

        for row in &rows {
            if let Some(string_ident) = &row.string_ident {
                Self::write_term_doc(out, row.term)?;
                writeln!(
                    out,
                    "{INDENT}{string_ident}: '{}',",
                    escape_single(&row.term.local_name)
                )?;
                writeln!(out)?;
            }
        }

        for (i, row) in rows.iter().enumerate() {
            Self::write_term_doc(out, row.term)?;
            let local = escape_single(&row.term.local_name);
            if i + 1 < rows.len() {
                writeln!(out, "{INDENT}{}: NAMESPACE + '{local}',", row.ident)?;
            } else {
                writeln!(out, "{INDENT}{}: NAMESPACE + '{local}'", row.ident)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "}};")?;
        writeln!(out)?;
        writeln!(out, "export default {class_name};")?;
        out.flush()?;
        Ok(())
    }
}
