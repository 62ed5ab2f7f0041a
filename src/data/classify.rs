use std::path::Path;

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rule table: which title terms mark a contact as executive
// ---------------------------------------------------------------------------

/// Inclusion terms. A title counts as executive when any of these matches as
/// a whole word, case-insensitively.
const DEFAULT_INCLUDE: &[&str] = &[
    "CEO",
    "CFO",
    "CTO",
    "CIO",
    "COO",
    "CMO",
    "CHRO",
    "CLO",
    "CPO",
    "CRO",
    "Vice President",
    "VP",
    "V.P.",
    "Managing Director",
    "Director",
    "Senior Director",
    "Executive Director",
    "Senior",
    "Sr.",
    "Principal",
    "Lead",
    "Head",
    "Chief",
    "President",
    "Partner",
    "Owner",
    "Founder",
    "Chairman",
    "Executive",
    "Leader",
    "Manager",
    "MD",
];

/// Exclusion terms. These win over inclusions: an "HR Director" is not kept.
const DEFAULT_EXCLUDE: &[&str] = &["HR", "Human Resources"];

/// The classification vocabulary as plain data, so alternative rule tables
/// can be loaded from JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RuleSet {
    /// Compile every term into its word-boundary regex.
    pub fn compile(&self) -> Result<TitleClassifier, regex::Error> {
        Ok(TitleClassifier {
            include: compile_terms(&self.include)?,
            exclude: compile_terms(&self.exclude)?,
        })
    }

    /// Read a rule set from a JSON file:
    /// `{ "include": ["CEO", ...], "exclude": ["HR", ...] }`.
    pub fn from_json_file(path: &Path) -> anyhow::Result<RuleSet> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading rule set {}", path.display()))?;
        serde_json::from_str(&text).context("parsing rule set JSON")
    }
}

fn compile_terms(terms: &[String]) -> Result<Vec<CompiledTerm>, regex::Error> {
    terms
        .iter()
        .map(|term| {
            Ok(CompiledTerm {
                pattern: Regex::new(&word_boundary_pattern(term))?,
                term: term.clone(),
            })
        })
        .collect()
}

/// Case-insensitive pattern matching `term` as a whole word. A `\b` anchor
/// only holds next to a word character, so ends like the dot of `"Sr."` are
/// left unanchored.
fn word_boundary_pattern(term: &str) -> String {
    let mut pattern = String::from("(?i)");
    if term.chars().next().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern
}

// ---------------------------------------------------------------------------
// TitleClassifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct CompiledTerm {
    term: String,
    pattern: Regex,
}

/// Compiled form of a [`RuleSet`]. Classification is a pure function of the
/// title string.
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    include: Vec<CompiledTerm>,
    exclude: Vec<CompiledTerm>,
}

impl Default for TitleClassifier {
    fn default() -> Self {
        RuleSet::default()
            .compile()
            .expect("built-in rule set compiles")
    }
}

impl TitleClassifier {
    /// First inclusion term matching the title, ignoring exclusions.
    pub fn matched_term(&self, title: &str) -> Option<&str> {
        self.include
            .iter()
            .find(|t| t.pattern.is_match(title))
            .map(|t| t.term.as_str())
    }

    /// Whether the title names a senior/executive role: some inclusion term
    /// matches and no exclusion term does.
    pub fn is_executive(&self, title: &str) -> bool {
        self.matched_term(title).is_some()
            && !self.exclude.iter().any(|t| t.pattern.is_match(title))
    }
}
