//! Lint issues.
//!
//! This module provides the [`Issue`] type for representing findings,
//! whether structural (reported by the parser) or produced by a rule.

use super::rule::Severity;

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// The same key is assigned more than once.
    Duplicate,
    /// A required variable is not defined.
    MissingRequired,
    /// A non-comment line has no `=`.
    MalformedLine,
    /// A line assigns a value to an empty key.
    EmptyKey,
    /// A key is assigned an empty value.
    EmptyValue,
    /// A key contains whitespace.
    InvalidKeyFormat,
    /// A value looks like a real secret committed in plaintext.
    PotentialSecret,
    /// A key breaks naming conventions.
    NamingConvention,
}

impl IssueKind {
    /// Every kind, in reporting order.
    pub const ALL: [IssueKind; 8] = [
        IssueKind::Duplicate,
        IssueKind::MissingRequired,
        IssueKind::MalformedLine,
        IssueKind::EmptyKey,
        IssueKind::EmptyValue,
        IssueKind::InvalidKeyFormat,
        IssueKind::PotentialSecret,
        IssueKind::NamingConvention,
    ];

    /// Human-readable label, e.g. `"duplicate variable"`.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Duplicate => "duplicate variable",
            IssueKind::MissingRequired => "missing required variable",
            IssueKind::MalformedLine => "malformed line",
            IssueKind::EmptyKey => "empty key",
            IssueKind::EmptyValue => "empty value",
            IssueKind::InvalidKeyFormat => "invalid key format",
            IssueKind::PotentialSecret => "potential secret in plaintext",
            IssueKind::NamingConvention => "naming convention violation",
        }
    }

    /// Stable machine identifier, e.g. `"duplicate"`.
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::Duplicate => "duplicate",
            IssueKind::MissingRequired => "missing-required",
            IssueKind::MalformedLine => "malformed-line",
            IssueKind::EmptyKey => "empty-key",
            IssueKind::EmptyValue => "empty-value",
            IssueKind::InvalidKeyFormat => "invalid-key-format",
            IssueKind::PotentialSecret => "potential-secret",
            IssueKind::NamingConvention => "naming-convention",
        }
    }

    /// Severity used by the output formatters.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::EmptyValue | IssueKind::InvalidKeyFormat | IssueKind::NamingConvention => {
                Severity::Warning
            }
            IssueKind::Duplicate
            | IssueKind::MissingRequired
            | IssueKind::MalformedLine
            | IssueKind::EmptyKey
            | IssueKind::PotentialSecret => Severity::Error,
        }
    }

    /// Whether this is one of the parser's syntax categories.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            IssueKind::MalformedLine | IssueKind::EmptyKey | IssueKind::InvalidKeyFormat
        )
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reportable finding.
///
/// `first_line`/`last_line` of 0 mean "no specific location". When both
/// are set and differ, the issue spans a range.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Category of the finding.
    pub kind: IssueKind,
    /// What the finding is about: usually a key, or the offending line.
    pub subject: String,
    /// File the finding belongs to.
    pub file: String,
    /// First line involved, 0 if none.
    pub first_line: usize,
    /// Last line involved, 0 if none.
    pub last_line: usize,
    /// Remediation hints, in display order.
    pub recommendations: Vec<String>,
}

impl Issue {
    /// Create an issue with no location and no recommendations.
    pub fn new(kind: IssueKind, subject: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            file: file.into(),
            first_line: 0,
            last_line: 0,
            recommendations: vec![],
        }
    }

    /// Locate this issue on a single line.
    pub fn at_line(self, line: usize) -> Self {
        self.spanning(line, line)
    }

    /// Locate this issue on a range of lines.
    pub fn spanning(mut self, first_line: usize, last_line: usize) -> Self {
        self.first_line = first_line;
        self.last_line = last_line;
        self
    }

    /// Append one recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Append several recommendations.
    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations
            .extend(recommendations.into_iter().map(Into::into));
        self
    }

    /// Severity derived from the kind.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Whether the issue points at a line.
    pub fn has_location(&self) -> bool {
        self.first_line > 0 || self.last_line > 0
    }

    /// Whether the issue spans more than one line.
    pub fn is_range(&self) -> bool {
        self.first_line > 0 && self.last_line > 0 && self.first_line != self.last_line
    }

    /// Line to sort and annotate by: the first line if set, else the last.
    pub fn primary_line(&self) -> usize {
        if self.first_line > 0 {
            self.first_line
        } else {
            self.last_line
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_range() {
            write!(
                f,
                "{} '{}' (lines {}-{})",
                self.kind, self.subject, self.first_line, self.last_line
            )
        } else if self.has_location() {
            write!(f, "{} '{}' (line {})", self.kind, self.subject, self.primary_line())
        } else {
            write!(f, "{} '{}'", self.kind, self.subject)
        }
    }
}
