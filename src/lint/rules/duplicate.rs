//! Duplicate variable detection.
//!
//! Reports each key assigned more than once, spanning its first and last
//! occurrence. Occurrences in between are not reported individually.

use std::collections::HashMap;

use crate::lint::{Issue, IssueKind, LintRule, RuleId};
use crate::parse::EnvVar;

/// Flags keys defined more than once in the same file.
pub struct DuplicateRule;

impl LintRule for DuplicateRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate")
    }

    fn name(&self) -> &str {
        "Duplicate Variables"
    }

    fn description(&self) -> &str {
        "Detects variables defined more than once"
    }

    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        // key -> (first line, last line, occurrences)
        let mut seen: HashMap<&str, (usize, usize, usize)> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for var in variables {
            seen.entry(var.key.as_str())
                .and_modify(|(_, last, count)| {
                    *last = var.line;
                    *count += 1;
                })
                .or_insert_with(|| {
                    order.push(var.key.as_str());
                    (var.line, var.line, 1)
                });
        }

        order
            .into_iter()
            .filter_map(|key| {
                let (first, last, count) = seen[&key];
                (count > 1).then(|| {
                    Issue::new(IssueKind::Duplicate, key, file)
                        .spanning(first, last)
                        .with_recommendation(format!(
                            "'{}' is defined {} times; keep a single definition",
                            key, count
                        ))
                        .with_recommendation(
                            "Loaders usually keep the last definition, which hides the others",
                        )
                })
            })
            .collect()
    }
}
