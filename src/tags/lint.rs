use crate::domain::SemverTag;
use git2::Oid;
use std::collections::HashMap;
use std::fmt;

/// Upper bound on how many tags a lint run inspects
pub const LINT_WINDOW: usize = 100;

/// A single tag-history anomaly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Tag whose `v` prefix differs from the first inspected tag
    InconsistentPrefix { tag: String },
    /// Commit carrying more than one semver tag
    SharedCommit { commit: Oid, tags: Vec<String> },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::InconsistentPrefix { tag } => {
                write!(f, "Tag `{}` not in one style with others.", tag)
            }
            Finding::SharedCommit { commit, tags } => write!(
                f,
                "Commit `{}` has several semver tags: `{}`.",
                commit,
                tags.join(", ")
            ),
        }
    }
}

/// Aggregated result of a lint run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    findings: Vec<Finding>,
}

impl LintReport {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn has_anomalies(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Check a tag list for mixed prefix styles and commits tagged more than once.
///
/// The first tag sets the expected style. Prefix findings come first, in input
/// order, followed by shared-commit findings ordered by each commit's first
/// appearance. An empty list is consistent.
pub fn lint(tags: &[SemverTag]) -> LintReport {
    let mut findings = Vec::new();

    let Some(first) = tags.first() else {
        return LintReport::default();
    };

    let expected_prefix = first.has_v_prefix();
    let mut by_commit: Vec<(Oid, Vec<String>)> = Vec::new();
    let mut commit_index: HashMap<Oid, usize> = HashMap::new();

    for tag in tags {
        if tag.has_v_prefix() != expected_prefix {
            findings.push(Finding::InconsistentPrefix {
                tag: tag.name().to_string(),
            });
        }

        let index = *commit_index.entry(tag.commit).or_insert_with(|| {
            by_commit.push((tag.commit, Vec::new()));
            by_commit.len() - 1
        });
        by_commit[index].1.push(tag.name().to_string());
    }

    findings.extend(
        by_commit
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(commit, tags)| Finding::SharedCommit { commit, tags }),
    );

    LintReport { findings }
}
