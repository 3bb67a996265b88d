use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rdf2vocab::config::{CaseConvention, CollisionPolicy, GenerationConfig};
use rdf2vocab::emitter::javascript::JavascriptEmitter;
use rdf2vocab::emitter::python::PythonEmitter;
use rdf2vocab::emitter::rust::RustEmitter;
use rdf2vocab::emitter::VocabEmitter;
use rdf2vocab::extraction::extractor;
use rdf2vocab::store::loader::{self, RdfFormat};

/// Generate vocabulary constant source files from RDF ontologies.
#[derive(Parser)]
#[command(name = "rdf2vocab", version, about)]
struct Cli {
    /// Path to the vocabulary document (Turtle, N-Triples or RDF/XML).
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Input format: turtle, ntriples, rdfxml [default: by file extension].
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Target language: rust, javascript, python.
    #[arg(short, long, value_name = "LANG", default_value = "rust")]
    target: String,

    /// Vocabulary display name [default: the output file stem].
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Namespace prefix IRI [default: detected from the document].
    #[arg(short, long, value_name = "IRI")]
    prefix: Option<String>,

    /// Preferred language tag for labels and comments.
    #[arg(long, value_name = "TAG", default_value = "en")]
    preferred_language: String,

    /// Case convention for term constants: unmodified, upper-snake,
    /// lower-snake, upper-camel, lower-camel.
    #[arg(short, long, value_name = "CASE", default_value = "upper-snake")]
    case: String,

    /// Case convention for the string constant block.
    #[arg(long, value_name = "CASE")]
    string_case: Option<String>,

    /// Prefix prepended to string constant identifiers.
    #[arg(long, value_name = "TEXT")]
    string_prefix: Option<String>,

    /// Suffix appended to string constant identifiers.
    #[arg(long, value_name = "TEXT")]
    string_suffix: Option<String>,

    /// Abort when two terms reduce to the same local name.
    #[arg(long)]
    fail_on_collision: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_case(token: &str) -> Result<CaseConvention, String> {
    CaseConvention::from_token(token).ok_or_else(|| {
        format!(
            "unknown case convention: {token}. Use 'unmodified', 'upper-snake', \
             'lower-snake', 'upper-camel' or 'lower-camel'."
        )
    })
}

fn stem_of(path: &Path) -> Result<String, String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| format!("could not derive a module name from: {}", path.display()))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli
        .format
        .as_deref()
        .map(|token| {
            RdfFormat::from_token(token).ok_or_else(|| {
                format!("unknown format: {token}. Use 'turtle', 'ntriples' or 'rdfxml'.")
            })
        })
        .transpose()?;

    let config = GenerationConfig {
        name: cli.name.clone(),
        prefix: cli.prefix.clone(),
        preferred_language: Some(cli.preferred_language.clone()),
        constant_case: parse_case(&cli.case)?,
        string_case: cli.string_case.as_deref().map(parse_case).transpose()?,
        string_prefix: cli.string_prefix.clone(),
        string_suffix: cli.string_suffix.clone(),
        collision_policy: if cli.fail_on_collision {
            CollisionPolicy::Fail
        } else {
            CollisionPolicy::Warn
        },
    };

    // The generated class/module is named after the output file (or the
    // input file for stdout output) unless a vocabulary name is given.
    let class_name = match &cli.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => match &cli.output {
            Some(path) => stem_of(path)?,
            None => stem_of(&cli.input)?,
        },
    };

    let store = loader::load_file(&cli.input, format)?;
    let vocab = extractor::extract(&store, &config, &class_name)?;

    // Render into memory first so a failed run leaves no output file.
    let mut buffer = Vec::new();
    match cli.target.to_lowercase().as_str() {
        "rust" | "rs" => {
            let mut emitter = RustEmitter::new(&mut buffer);
            emitter.emit(&class_name, &config, &vocab)?;
        }
        "javascript" | "js" => {
            let mut emitter = JavascriptEmitter::new(&mut buffer);
            emitter.emit(&class_name, &config, &vocab)?;
        }
        "python" | "py" => {
            let mut emitter = PythonEmitter::new(&mut buffer);
            emitter.emit(&class_name, &config, &vocab)?;
        }
        other => {
            return Err(
                format!("unknown target: {other}. Use 'rust', 'javascript' or 'python'.").into(),
            );
        }
    }

    match &cli.output {
        Some(path) => std::fs::write(path, &buffer)?,
        None => io::stdout().lock().write_all(&buffer)?,
    }

    if !cli.quiet {
        eprintln!(
            "Generated {} constants for {} from {}",
            vocab.terms.len(),
            class_name,
            cli.input.display()
        );
    }

    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "rdf2vocab=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
