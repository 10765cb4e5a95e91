//! Go identifier synthesis.
//!
//! Schema names (property names, enum values, value prefixes) are turned
//! into exported Go identifiers. Word parts listed in the [`AcronymTable`]
//! are rendered all-caps (`userId` → `UserID`).

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Identifier used when nothing usable is left of a name, and prefixed to
/// names that would otherwise start with a digit.
pub const PLACEHOLDER: &str = "Value";

/// Word separator after normalization; also the enum prefix separator.
pub const SEPARATOR: char = '_';

/// Reserved rendering of the `_meta` property used by MCP-style schemas.
const META_IDENTIFIER: &str = "Meta";

/// Go keywords; a definition named after one is renamed.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Acronyms rendered all-caps unless overridden.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "a2a", "api", "html", "http", "https", "id", "json", "jsonrpc", "mime", "rpc", "sse", "uri",
    "url", "uuid",
];

/// Lowercase word part → render all-caps.
///
/// Built once per generation run and passed to every naming call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymTable {
    entries: BTreeMap<String, bool>,
}

impl AcronymTable {
    /// A table with no acronyms at all.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The default table with caller overrides merged in.
    ///
    /// Override keys are lowercased; `false` disables a default acronym.
    pub fn with_overrides(overrides: &BTreeMap<String, bool>) -> Self {
        let mut table = Self::default();
        for (token, enabled) in overrides {
            table.entries.insert(token.to_ascii_lowercase(), *enabled);
        }
        table
    }

    pub fn is_acronym(&self, lowercase_part: &str) -> bool {
        self.entries.get(lowercase_part).copied().unwrap_or(false)
    }
}

impl Default for AcronymTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ACRONYMS
                .iter()
                .map(|token| (token.to_string(), true))
                .collect(),
        }
    }
}

/// Convert an arbitrary schema name into an exported Go identifier.
///
/// Never returns an empty string or one starting with a digit, and
/// `to_identifier(&to_identifier(x)) == to_identifier(x)`.
pub fn to_identifier(raw: &str, acronyms: &AcronymTable) -> String {
    let joined = join_words(raw, acronyms);
    // Parts of neighbouring words can meet once joined (`a_2a` → `A2a`, which
    // reads as `a2a`), so the joined name is rendered again as one word.
    render_word(&joined, acronyms)
}

/// Render each separator-delimited word of `raw` and concatenate them.
fn join_words(raw: &str, acronyms: &AcronymTable) -> String {
    if raw == "_meta" {
        return META_IDENTIFIER.to_string();
    }

    let trimmed = raw.trim_start_matches(|c: char| c == '_' || c.is_ascii_digit());
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| if matches!(c, '-' | '.' | ' ') { SEPARATOR } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == SEPARATOR)
        .collect();

    let words: Vec<&str> = normalized
        .split(SEPARATOR)
        .filter(|word| !word.is_empty())
        .collect();

    let ident = match words.as_slice() {
        [word] => render_word(word, acronyms),
        words => {
            let mut ident = String::with_capacity(normalized.len());
            for word in words {
                if has_lowercase(word) {
                    ident.push_str(&render_word(word, acronyms));
                } else {
                    // All-caps words of a longer name are title-cased: `TASK_STATE` → `TaskState`.
                    ident.push_str(&render_part(&word.to_ascii_lowercase(), acronyms));
                }
            }
            ident
        }
    };

    let ident = title_case(&ident);
    match ident.chars().next() {
        None => PLACEHOLDER.to_string(),
        Some(c) if c.is_ascii_digit() => format!("{PLACEHOLDER}{ident}"),
        Some(_) => ident,
    }
}

/// Render one alphanumeric word. A word without lowercase letters
/// (`ACTIVE`, `HTTP`) keeps its casing.
fn render_word(word: &str, acronyms: &AcronymTable) -> String {
    if !has_lowercase(word) {
        return word.to_string();
    }
    split_camel(word)
        .into_iter()
        .map(|part| render_part(part, acronyms))
        .collect()
}

fn render_part(part: &str, acronyms: &AcronymTable) -> String {
    let lower = part.to_ascii_lowercase();
    if acronyms.is_acronym(&lower) {
        lower.to_ascii_uppercase()
    } else if !has_lowercase(part) {
        part.to_string()
    } else {
        title_case(&lower)
    }
}

/// Whether `name` can be declared as a Go type as it is.
pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}

/// Go type names of the collected definitions.
///
/// Names that are already Go identifiers are kept verbatim. Others
/// (`task-status`, `io.k8s.api.core.v1.Pod`) go through [`to_identifier`],
/// and a name taken by an earlier definition gets a numeric suffix.
/// Declarations and `$ref`s both look names up here so they always agree.
#[derive(Debug, Clone)]
pub struct TypeNames {
    assigned: BTreeMap<String, String>,
    taken: BTreeSet<String>,
    acronyms: AcronymTable,
}

impl TypeNames {
    /// Assign names in definition order.
    pub fn new<'a>(
        definitions: impl IntoIterator<Item = &'a String>,
        acronyms: &AcronymTable,
    ) -> Self {
        let mut names = Self {
            assigned: BTreeMap::new(),
            taken: BTreeSet::new(),
            acronyms: acronyms.clone(),
        };
        for raw in definitions {
            let candidate = names.sanitize(raw);
            let mut go_name = candidate.clone();
            let mut n = 2;
            while names.taken.contains(&go_name) {
                go_name = format!("{candidate}{n}");
                n += 1;
            }
            if go_name != *raw {
                tracing::warn!(
                    definition = raw.as_str(),
                    renamed = go_name.as_str(),
                    "definition name is not a usable Go identifier"
                );
            }
            names.taken.insert(go_name.clone());
            names.assigned.insert(raw.clone(), go_name);
        }
        names
    }

    /// Go name for a definition or `$ref` target.
    ///
    /// Targets that were never collected are sanitized the same way.
    pub fn go_name(&self, raw: &str) -> String {
        match self.assigned.get(raw) {
            Some(name) => name.clone(),
            None => self.sanitize(raw),
        }
    }

    pub fn is_collected(&self, raw: &str) -> bool {
        self.assigned.contains_key(raw)
    }

    /// Whether some definition was given this Go name.
    pub fn is_taken(&self, go_name: &str) -> bool {
        self.taken.contains(go_name)
    }

    pub fn acronyms(&self) -> &AcronymTable {
        &self.acronyms
    }

    fn sanitize(&self, raw: &str) -> String {
        if is_go_identifier(raw) {
            raw.to_string()
        } else {
            to_identifier(raw, &self.acronyms)
        }
    }
}

/// Name for an enumeration, inferred from the common prefix of its values.
///
/// `["TASK_STATE_RUNNING", "TASK_STATE_DONE"]` gives `TaskState`. Without a
/// meaningful prefix the property name is used instead.
pub fn derive_enum_name(values: &[Value], fallback: &str, acronyms: &AcronymTable) -> String {
    let strings: Vec<&str> = values.iter().filter_map(Value::as_str).collect();
    if let Some(prefix) = meaningful_prefix(&strings) {
        let prefix = prefix.trim_end_matches(SEPARATOR);
        // An all-caps prefix is a type name, not a constant: `LEVEL_` → `Level`.
        let name = if has_lowercase(prefix) {
            to_identifier(prefix, acronyms)
        } else {
            to_identifier(&prefix.to_ascii_lowercase(), acronyms)
        };
        if name != PLACEHOLDER {
            return name;
        }
    }
    to_identifier(fallback, acronyms)
}

/// Longest literal prefix shared by every string, if non-empty.
pub fn common_prefix<'a>(strings: &[&'a str]) -> Option<&'a str> {
    let (first, rest) = strings.split_first()?;
    let mut prefix: &'a str = first;

    for s in rest {
        while !s.starts_with(prefix) {
            let mut chars = prefix.chars();
            chars.next_back();
            prefix = chars.as_str();
            if prefix.is_empty() {
                return None;
            }
        }
    }

    (!prefix.is_empty()).then_some(prefix)
}

/// A common prefix that reads as a name rather than a coincidence.
///
/// It must be longer than two characters and end at a separator, either its
/// own last character or the character following it in some value.
pub fn meaningful_prefix<'a>(strings: &[&'a str]) -> Option<&'a str> {
    let prefix = common_prefix(strings)?;
    if prefix.chars().count() <= 2 {
        return None;
    }
    let at_separator = prefix.ends_with(SEPARATOR)
        || strings
            .iter()
            .any(|s| s[prefix.len()..].starts_with(SEPARATOR));
    at_separator.then_some(prefix)
}

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Split an ASCII word at case boundaries.
///
/// A new part starts at an uppercase letter following a lowercase letter or
/// digit, and at the last capital of an uppercase run followed by a
/// lowercase letter or digit (`HTTPServer` → `HTTP`, `Server`; `AB2c` → `A`,
/// `B2c`). A part therefore never holds a capital after its first letter
/// unless it has no lowercase letters at all.
fn split_camel(word: &str) -> Vec<&str> {
    let bytes = word.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..bytes.len() {
        let prev = bytes[i - 1];
        let cur = bytes[i];
        let next = bytes.get(i + 1).copied();

        let after_lower = (prev.is_ascii_lowercase() || prev.is_ascii_digit())
            && cur.is_ascii_uppercase();
        let run_end = prev.is_ascii_uppercase()
            && cur.is_ascii_uppercase()
            && next.is_some_and(|n| n.is_ascii_lowercase() || n.is_ascii_digit());

        if after_lower || run_end {
            parts.push(&word[start..i]);
            start = i;
        }
    }
    parts.push(&word[start..]);
    parts
}
