use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Author metadata of a single commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
    pub authored_at: DateTime<Utc>,
    pub committed_at: DateTime<Utc>,
}

/// One logical author with the number of commits attributed to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub commits: usize,
}

/// Tally commits per author email.
///
/// When the same email shows up under different names, a commit whose author
/// time is later than its committer time replaces the display name. This is a
/// heuristic and does not guarantee the most recent name wins.
///
/// Sorted by commit count, highest first; ties keep first-seen order.
pub fn aggregate_authors(commits: &[CommitIdentity]) -> Vec<Author> {
    let mut authors: Vec<Author> = Vec::new();
    let mut by_email: HashMap<&str, usize> = HashMap::new();

    for commit in commits {
        let index = *by_email.entry(commit.email.as_str()).or_insert_with(|| {
            authors.push(Author {
                name: commit.name.clone(),
                email: commit.email.clone(),
                commits: 0,
            });
            authors.len() - 1
        });

        let author = &mut authors[index];
        author.commits += 1;

        if author.name != commit.name && commit.authored_at > commit.committed_at {
            author.name = commit.name.clone();
        }
    }

    authors.sort_by(|a, b| b.commits.cmp(&a.commits));
    authors
}
