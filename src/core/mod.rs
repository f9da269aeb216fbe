//! Core data model for task generation.
//!
//! Inputs (`AnalysisResult`, `RepositoryContext`) are produced by the
//! analysis collaborator and consumed as-is; the engine never reads source
//! text itself. The output type is [`Task`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-file static analysis output, one record per source file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub path: PathBuf,
    pub language: Language,
    pub complexity: f64,
    #[serde(default)]
    pub comments: Vec<CommentFinding>,
    #[serde(default, rename = "incompleteCode")]
    pub incomplete_code: Vec<IncompleteCodeFinding>,
    #[serde(default, rename = "securityIssues")]
    pub security_issues: Vec<SecurityFinding>,
}

/// A scanned comment, carrying the marker-derived findings extracted from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentFinding {
    #[serde(default)]
    pub markers: Vec<CommentMarker>,
}

/// A single TODO/FIXME-style marker found inside a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentMarker {
    pub category: TaskCategory,
    pub description: String,
    pub line_number: usize,
}

/// An incomplete-implementation marker (empty body, stub, pass, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncompleteCodeFinding {
    pub kind: IncompleteKind,
    pub name: Option<String>,
    pub description: Option<String>,
    pub line_number: Option<usize>,
}

/// A security finding flagged by the analyzer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityFinding {
    pub kind: VulnerabilityKind,
    pub description: String,
    pub line_number: Option<usize>,
    pub location: Option<String>,
    pub affected_component: Option<String>,
}

/// Repository-level context used by the priority scorer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryContext {
    pub full_name: String,
    pub last_commit_at: Option<DateTime<Utc>>,
    pub open_issues: u32,
}

impl RepositoryContext {
    /// Whole days elapsed since the last commit, 0 when the timestamp is
    /// unknown or lies in the future.
    pub fn days_since_last_commit(&self, now: DateTime<Utc>) -> i64 {
        self.last_commit_at
            .map(|at| (now - at).num_days().max(0))
            .unwrap_or(0)
    }
}

/// Task category, matching the analyzer's marker vocabulary.
///
/// Unknown marker categories map to `Other`; every consumer handles it as
/// an explicit fallback arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    Todo,
    Fixme,
    Bug,
    Security,
    IncompleteCode,
    Optimize,
    Review,
    Refactor,
    Documentation,
    Hack,
    Note,
    Other,
}

impl TaskCategory {
    /// Categories that mark inherently critical work.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Security | Self::Bug | Self::Fixme)
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(TaskCategory, &str)] = &[
            (TaskCategory::Todo, "TODO"),
            (TaskCategory::Fixme, "FIXME"),
            (TaskCategory::Bug, "BUG"),
            (TaskCategory::Security, "SECURITY"),
            (TaskCategory::IncompleteCode, "INCOMPLETE_CODE"),
            (TaskCategory::Optimize, "OPTIMIZE"),
            (TaskCategory::Review, "REVIEW"),
            (TaskCategory::Refactor, "REFACTOR"),
            (TaskCategory::Documentation, "DOCUMENTATION"),
            (TaskCategory::Hack, "HACK"),
            (TaskCategory::Note, "NOTE"),
            (TaskCategory::Other, "OTHER"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, s)| *s)
            .unwrap_or("OTHER");

        write!(f, "{display_str}")
    }
}

static INCOMPLETE_TAGS: &[(&str, IncompleteKind)] = &[
    ("EMPTY_FUNCTION", IncompleteKind::EmptyFunction),
    ("EMPTY_METHOD", IncompleteKind::EmptyMethod),
    ("EMPTY_CLASS", IncompleteKind::EmptyClass),
    ("EMPTY_BLOCK", IncompleteKind::EmptyBlock),
    ("PLACEHOLDER", IncompleteKind::Placeholder),
    ("STUB", IncompleteKind::Stub),
    ("NOT_IMPLEMENTED", IncompleteKind::NotImplemented),
    ("THROW_NOT_IMPLEMENTED", IncompleteKind::ThrowNotImplemented),
    ("PASS_STATEMENT", IncompleteKind::PassStatement),
    ("EMPTY_CATCH", IncompleteKind::EmptyCatch),
    ("EMPTY_FINALLY", IncompleteKind::EmptyFinally),
    ("EMPTY_CONSTRUCTOR", IncompleteKind::EmptyConstructor),
    ("EMPTY_DESTRUCTOR", IncompleteKind::EmptyDestructor),
    ("PARTIAL_IMPLEMENTATION", IncompleteKind::PartialImplementation),
    ("MOCK_IMPLEMENTATION", IncompleteKind::MockImplementation),
];

/// Kind of incomplete-code finding.
///
/// `Other` keeps the analyzer's raw tag so generic title templates and task
/// tags can still render it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncompleteKind {
    EmptyFunction,
    EmptyMethod,
    EmptyClass,
    EmptyBlock,
    Placeholder,
    Stub,
    NotImplemented,
    ThrowNotImplemented,
    PassStatement,
    EmptyCatch,
    EmptyFinally,
    EmptyConstructor,
    EmptyDestructor,
    PartialImplementation,
    MockImplementation,
    Other(String),
}

impl IncompleteKind {
    pub fn parse(tag: &str) -> Self {
        INCOMPLETE_TAGS
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| Self::Other(tag.to_string()))
    }

    /// The analyzer's tag form, e.g. `STUB`.
    pub fn tag(&self) -> &str {
        if let Self::Other(tag) = self {
            return tag;
        }
        INCOMPLETE_TAGS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(t, _)| *t)
            .unwrap_or("UNKNOWN")
    }

    /// Human-readable form of the tag: underscores to spaces, lowercased.
    pub fn humanized(&self) -> String {
        self.tag().replace('_', " ").to_lowercase()
    }
}

impl From<String> for IncompleteKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<IncompleteKind> for String {
    fn from(kind: IncompleteKind) -> Self {
        kind.tag().to_string()
    }
}

static VULNERABILITY_TAGS: &[(&str, VulnerabilityKind)] = &[
    ("SQL_INJECTION", VulnerabilityKind::SqlInjection),
    ("XSS", VulnerabilityKind::Xss),
    ("CSRF", VulnerabilityKind::Csrf),
    ("INSECURE_RANDOM", VulnerabilityKind::InsecureRandom),
    ("HARDCODED_SECRET", VulnerabilityKind::HardcodedSecret),
    ("HARDCODED_PASSWORD", VulnerabilityKind::HardcodedPassword),
    ("WEAK_CRYPTO", VulnerabilityKind::WeakCrypto),
    ("NO_ENCRYPTION", VulnerabilityKind::NoEncryption),
    ("PATH_TRAVERSAL", VulnerabilityKind::PathTraversal),
    ("COMMAND_INJECTION", VulnerabilityKind::CommandInjection),
    ("LDAP_INJECTION", VulnerabilityKind::LdapInjection),
    ("XXE", VulnerabilityKind::Xxe),
    ("INSECURE_DESERIALIZATION", VulnerabilityKind::InsecureDeserialization),
    ("MISSING_AUTHENTICATION", VulnerabilityKind::MissingAuthentication),
    ("MISSING_AUTHORIZATION", VulnerabilityKind::MissingAuthorization),
    (
        "WEAK_PASSWORD_REQUIREMENTS",
        VulnerabilityKind::WeakPasswordRequirements,
    ),
    ("INSECURE_COOKIE", VulnerabilityKind::InsecureCookie),
    ("MISSING_HTTPS", VulnerabilityKind::MissingHttps),
    ("EXPOSED_SENSITIVE_DATA", VulnerabilityKind::ExposedSensitiveData),
    ("UNSAFE_EVAL", VulnerabilityKind::UnsafeEval),
    ("UNSAFE_REGEX", VulnerabilityKind::UnsafeRegex),
    ("RACE_CONDITION", VulnerabilityKind::RaceCondition),
    ("BUFFER_OVERFLOW", VulnerabilityKind::BufferOverflow),
    ("INTEGER_OVERFLOW", VulnerabilityKind::IntegerOverflow),
    ("UNVALIDATED_INPUT", VulnerabilityKind::UnvalidatedInput),
    ("UNSANITIZED_OUTPUT", VulnerabilityKind::UnsanitizedOutput),
    ("SENSITIVE_DATA_IN_URL", VulnerabilityKind::SensitiveDataInUrl),
    ("SENSITIVE_DATA_IN_LOGS", VulnerabilityKind::SensitiveDataInLogs),
    ("MISSING_RATE_LIMITING", VulnerabilityKind::MissingRateLimiting),
    ("INSECURE_FILE_UPLOAD", VulnerabilityKind::InsecureFileUpload),
    ("DIRECTORY_LISTING", VulnerabilityKind::DirectoryListing),
    ("INFORMATION_DISCLOSURE", VulnerabilityKind::InformationDisclosure),
    ("MISSING_SECURITY_HEADERS", VulnerabilityKind::MissingSecurityHeaders),
    ("OUTDATED_DEPENDENCY", VulnerabilityKind::OutdatedDependency),
];

/// Vulnerability class of a security finding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VulnerabilityKind {
    SqlInjection,
    Xss,
    Csrf,
    InsecureRandom,
    HardcodedSecret,
    HardcodedPassword,
    WeakCrypto,
    NoEncryption,
    PathTraversal,
    CommandInjection,
    LdapInjection,
    Xxe,
    InsecureDeserialization,
    MissingAuthentication,
    MissingAuthorization,
    WeakPasswordRequirements,
    InsecureCookie,
    MissingHttps,
    ExposedSensitiveData,
    UnsafeEval,
    UnsafeRegex,
    RaceCondition,
    BufferOverflow,
    IntegerOverflow,
    UnvalidatedInput,
    UnsanitizedOutput,
    SensitiveDataInUrl,
    SensitiveDataInLogs,
    MissingRateLimiting,
    InsecureFileUpload,
    DirectoryListing,
    InformationDisclosure,
    MissingSecurityHeaders,
    OutdatedDependency,
    Other(String),
}

impl VulnerabilityKind {
    pub fn parse(tag: &str) -> Self {
        VULNERABILITY_TAGS
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| Self::Other(tag.to_string()))
    }

    /// The analyzer's tag form, e.g. `SQL_INJECTION`.
    pub fn tag(&self) -> &str {
        if let Self::Other(tag) = self {
            return tag;
        }
        VULNERABILITY_TAGS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(t, _)| *t)
            .unwrap_or("UNKNOWN")
    }

    /// Human-readable form of the tag: underscores to spaces, lowercased.
    pub fn humanized(&self) -> String {
        self.tag().replace('_', " ").to_lowercase()
    }
}

impl From<String> for VulnerabilityKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<VulnerabilityKind> for String {
    fn from(kind: VulnerabilityKind) -> Self {
        kind.tag().to_string()
    }
}

/// Source language of an analyzed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["rs"], Language::Rust),
            (&["py"], Language::Python),
            (&["js", "jsx", "mjs", "cjs"], Language::JavaScript),
            (&["ts", "tsx", "mts", "cts"], Language::TypeScript),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Unknown => "unknown",
        };
        write!(f, "{display_str}")
    }
}

/// Normalized factor vector behind a task's priority score.
///
/// Every factor except `custom_priority` lives in a common 0-10 band so the
/// weight vector stays portable across repositories of different size and
/// activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityFactors {
    pub critical_comments: f64,
    pub days_since_commit: f64,
    pub open_issues: f64,
    pub code_complexity: f64,
    pub security_vulnerability: f64,
    pub custom_priority: f64,
}

/// Lifecycle status of a task. The engine always emits `Open`; the other
/// states belong to the persistence collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Completed,
    Snoozed,
}

/// Coarse priority band derived from a task's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Critical
        } else if score >= 50.0 {
            Self::High
        } else if score >= 25.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
            PriorityLevel::Critical => "Critical",
        };
        write!(f, "{display_str}")
    }
}

/// An actionable work item derived from one raw finding.
///
/// Ephemeral output: created fresh on every engine invocation and handed to
/// the caller to persist or discard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority_score: f64,
    pub priority_factors: PriorityFactors,
    pub file_path: PathBuf,
    pub line_number: usize,
    pub code_snippet: String,
    pub suggested_next_steps: String,
    pub status: TaskStatus,
    pub tags: Vec<String>,
}

impl Task {
    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_score(self.priority_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn category_display_matches_marker_vocabulary() {
        assert_eq!(TaskCategory::Todo.to_string(), "TODO");
        assert_eq!(TaskCategory::IncompleteCode.to_string(), "INCOMPLETE_CODE");
        assert_eq!(TaskCategory::Other.to_string(), "OTHER");
    }

    #[test]
    fn critical_categories_are_security_bug_fixme() {
        assert!(TaskCategory::Security.is_critical());
        assert!(TaskCategory::Bug.is_critical());
        assert!(TaskCategory::Fixme.is_critical());
        assert!(!TaskCategory::Todo.is_critical());
        assert!(!TaskCategory::IncompleteCode.is_critical());
    }

    #[test]
    fn incomplete_kind_roundtrips_known_tags() {
        let kind = IncompleteKind::parse("STUB");
        assert_eq!(kind, IncompleteKind::Stub);
        assert_eq!(kind.tag(), "STUB");
    }

    #[test]
    fn incomplete_kind_keeps_unknown_tags() {
        let kind = IncompleteKind::parse("HALF_WIRED_HANDLER");
        assert_eq!(kind.tag(), "HALF_WIRED_HANDLER");
        assert_eq!(kind.humanized(), "half wired handler");
    }

    #[test]
    fn vulnerability_kind_parses_and_humanizes() {
        assert_eq!(
            VulnerabilityKind::parse("SQL_INJECTION"),
            VulnerabilityKind::SqlInjection
        );
        let unknown = VulnerabilityKind::parse("PROTOTYPE_POLLUTION");
        assert_eq!(unknown.humanized(), "prototype pollution");
    }

    #[test]
    fn language_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("tsx"), Language::TypeScript);
        assert_eq!(Language::from_extension("zig"), Language::Unknown);
    }

    #[test]
    fn language_from_path() {
        assert_eq!(
            Language::from_path(std::path::Path::new("src/auth/login.py")),
            Language::Python
        );
    }

    #[test]
    fn days_since_last_commit_defaults_to_zero() {
        let repo = RepositoryContext {
            full_name: "acme/api".to_string(),
            last_commit_at: None,
            open_issues: 3,
        };
        assert_eq!(repo.days_since_last_commit(Utc::now()), 0);
    }

    #[test]
    fn days_since_last_commit_clamps_future_timestamps() {
        let now = Utc::now();
        let repo = RepositoryContext {
            full_name: "acme/api".to_string(),
            last_commit_at: Some(now + Duration::days(7)),
            open_issues: 0,
        };
        assert_eq!(repo.days_since_last_commit(now), 0);
    }

    #[test]
    fn priority_level_thresholds() {
        assert_eq!(PriorityLevel::from_score(80.0), PriorityLevel::Critical);
        assert_eq!(PriorityLevel::from_score(75.0), PriorityLevel::Critical);
        assert_eq!(PriorityLevel::from_score(60.0), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(30.0), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(10.0), PriorityLevel::Low);
    }

    #[test]
    fn kinds_serialize_as_analyzer_tags() {
        let json = serde_json::to_string(&IncompleteKind::PassStatement).unwrap();
        assert_eq!(json, "\"PASS_STATEMENT\"");
        let parsed: VulnerabilityKind = serde_json::from_str("\"XSS\"").unwrap();
        assert_eq!(parsed, VulnerabilityKind::Xss);
    }
}
