//! Visual theme and styling.

use console::Style;

use crate::lint::IssueKind;

/// envlint's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning-level findings (yellow).
    pub warning: Style,
    /// Style for error-level findings (red).
    pub error: Style,
    /// Style for potential secrets (red bold).
    pub secret: Style,
    /// Style for naming and format findings (blue).
    pub convention: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (red bold).
    pub header: Style,
    /// Style for file names (blue bold).
    pub file: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            secret: Style::new().red().bold(),
            convention: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().red().bold(),
            file: Style::new().blue().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            secret: Style::new(),
            convention: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            file: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style used for an issue's headline.
    pub fn kind_style(&self, kind: IssueKind) -> &Style {
        match kind {
            IssueKind::PotentialSecret => &self.secret,
            IssueKind::Duplicate | IssueKind::MissingRequired => &self.error,
            IssueKind::MalformedLine | IssueKind::EmptyKey | IssueKind::EmptyValue => {
                &self.warning
            }
            IssueKind::InvalidKeyFormat | IssueKind::NamingConvention => &self.convention,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Icon shown in front of an issue.
pub fn kind_icon(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::Duplicate => "🔄",
        IssueKind::MissingRequired => "❓",
        IssueKind::EmptyValue | IssueKind::EmptyKey => "🗳️",
        IssueKind::MalformedLine => "🔧",
        IssueKind::PotentialSecret => "🔒",
        IssueKind::NamingConvention | IssueKind::InvalidKeyFormat => "📐",
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
