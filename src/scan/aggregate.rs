//! Scan results and the confidence aggregator.
//!
//! A [`ScanResult`] is built by folding per-file results together with
//! [`ScanResult::merge`]. [`ScanResult::required_variables`] reduces the
//! collected usages to the names a codebase most likely depends on.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scanner::ScanError;

/// One pattern match interpreted as a possible variable reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRecord {
    /// Candidate variable name.
    pub variable: String,
    /// File the match was found in.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// The trimmed source line.
    pub context: String,
    /// Name of the pattern that matched.
    pub pattern_name: String,
    /// Score in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// Everything found by one scan.
///
/// Usages are bucketed by variable name; every record's `variable` equals
/// its bucket key.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Usages grouped by variable name, in discovery order per name.
    pub usages_by_variable: BTreeMap<String, Vec<UsageRecord>>,
    /// Files that were read, in walk order.
    pub files_scanned: Vec<String>,
    /// Non-fatal errors collected during the walk.
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// Result for a single file holding `usages`.
    pub fn for_file(file: impl Into<String>, usages: impl IntoIterator<Item = UsageRecord>) -> Self {
        let mut result = Self {
            files_scanned: vec![file.into()],
            ..Self::default()
        };
        for usage in usages {
            result.record(usage);
        }
        result
    }

    /// Result holding a single error.
    pub fn for_error(error: ScanError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    /// Add one usage to its variable's bucket.
    pub fn record(&mut self, usage: UsageRecord) {
        self.usages_by_variable
            .entry(usage.variable.clone())
            .or_default()
            .push(usage);
    }

    /// Fold `other` into this result, keeping usages in order.
    pub fn merge(mut self, other: ScanResult) -> Self {
        for (variable, usages) in other.usages_by_variable {
            self.usages_by_variable
                .entry(variable)
                .or_default()
                .extend(usages);
        }
        self.files_scanned.extend(other.files_scanned);
        self.errors.extend(other.errors);
        self
    }

    /// Usages recorded for `variable`.
    pub fn usages(&self, variable: &str) -> &[UsageRecord] {
        self.usages_by_variable
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mean confidence of a variable's usages, if it was seen.
    pub fn average_confidence(&self, variable: &str) -> Option<f64> {
        mean_confidence(self.usages(variable))
    }

    /// Number of distinct variable names seen.
    pub fn variable_count(&self) -> usize {
        self.usages_by_variable.len()
    }

    /// Total number of usages across all variables.
    pub fn total_usages(&self) -> usize {
        self.usages_by_variable.values().map(Vec::len).sum()
    }

    /// Names with at least `min_usages` usages whose mean confidence is at
    /// least `min_confidence`, sorted by name.
    ///
    /// # Example
    ///
    /// ```
    /// use envlint::scan::Scanner;
    ///
    /// let scanner = Scanner::new();
    /// let result = scanner.scan_content("const url = process.env.DATABASE_URL;\n", "app.js");
    ///
    /// assert_eq!(result.required_variables(0.7, 1), vec!["DATABASE_URL"]);
    /// assert!(result.required_variables(0.7, 2).is_empty());
    /// ```
    pub fn required_variables(&self, min_confidence: f64, min_usages: usize) -> Vec<String> {
        self.usages_by_variable
            .iter()
            .filter(|(_, usages)| usages.len() >= min_usages)
            .filter(|(_, usages)| {
                mean_confidence(usages).is_some_and(|mean| mean >= min_confidence)
            })
            .map(|(variable, _)| variable.clone())
            .collect()
    }
}

fn mean_confidence(usages: &[UsageRecord]) -> Option<f64> {
    if usages.is_empty() {
        return None;
    }
    let total: f64 = usages.iter().map(|u| u.confidence).sum();
    Some(total / usages.len() as f64)
}
