//! Generation configuration, constructed once per run and immutable
//! thereafter.

/// Case convention applied to a raw local name when forming an identifier.
/// Every convention is a pure function of the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseConvention {
    /// Keep the local name as written in the document.
    Unmodified,
    /// `FIRST_NAME`
    #[default]
    UpperSnake,
    /// `first_name`
    LowerSnake,
    /// `FirstName`
    UpperCamel,
    /// `firstName`
    LowerCamel,
}

impl CaseConvention {
    /// Parse a command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "unmodified" | "none" => Some(Self::Unmodified),
            "upper-snake" | "upper_snake" => Some(Self::UpperSnake),
            "lower-snake" | "lower_snake" => Some(Self::LowerSnake),
            "upper-camel" | "upper_camel" => Some(Self::UpperCamel),
            "lower-camel" | "lower_camel" => Some(Self::LowerCamel),
            _ => None,
        }
    }
}

/// What to do when two distinct term IRIs reduce to the same local name.
///
/// The default keeps the first IRI seen and logs a warning for every later
/// one. The losing terms are silently absent from the generated file, so
/// callers that cannot tolerate that loss can opt into failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    #[default]
    Warn,
    Fail,
}

/// Immutable per-run configuration shared by extraction and emission.
#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    /// Vocabulary display name; falls back to the output file stem.
    pub name: Option<String>,
    /// Namespace prefix IRI; detected from the document when absent.
    pub prefix: Option<String>,
    /// Preferred language tag for labels and comments, e.g. "en".
    pub preferred_language: Option<String>,
    /// Case convention for term constants.
    pub constant_case: CaseConvention,
    /// Case convention for the string constant block.
    pub string_case: Option<CaseConvention>,
    /// Prefix prepended to string constant identifiers.
    pub string_prefix: Option<String>,
    /// Suffix appended to string constant identifiers.
    pub string_suffix: Option<String>,
    /// Local-name collision handling.
    pub collision_policy: CollisionPolicy,
}

impl GenerationConfig {
    /// The string constant block is emitted as soon as any of its three
    /// knobs is set.
    pub fn string_block_enabled(&self) -> bool {
        self.string_case.is_some()
            || self
                .string_prefix
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
            || self
                .string_suffix
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }
}
