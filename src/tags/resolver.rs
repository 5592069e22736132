use crate::domain::SemverTag;
use crate::error::{GitToolsError, Result};
use crate::git::Repository;
use std::cmp::Ordering;

/// Answers version questions from the repository's tag history.
///
/// Every call re-reads the tags from the backend; nothing is cached between
/// calls. Tags that do not parse as semantic versions are skipped silently.
pub struct TagResolver<'r, R: Repository + ?Sized> {
    repo: &'r R,
}

impl<'r, R: Repository + ?Sized> TagResolver<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        TagResolver { repo }
    }

    /// All tags that parse as semantic versions, in backend enumeration order
    pub fn semver_tags(&self) -> Result<Vec<SemverTag>> {
        let tags = self.repo.list_tags()?;

        Ok(tags.iter().filter_map(SemverTag::from_ref).collect())
    }

    /// The tag with the highest version.
    ///
    /// When two tag names parse to the same precedence, the one enumerated
    /// later wins.
    ///
    /// # Returns
    /// * `Err(GitToolsError::NoSemverTags)` - If no tag parsed
    pub fn max(&self) -> Result<SemverTag> {
        self.semver_tags()?
            .into_iter()
            .reduce(|max, tag| match tag.version.compare(&max.version) {
                Ordering::Less => max,
                Ordering::Equal | Ordering::Greater => tag,
            })
            .ok_or(GitToolsError::NoSemverTags)
    }

    /// The first `n` tags after a stable ascending sort by version.
    ///
    /// Note this yields the `n` *lowest* versions, lowest first. Tags with
    /// equal precedence keep their enumeration order.
    pub fn top_n(&self, n: usize) -> Result<Vec<SemverTag>> {
        let mut tags = self.semver_tags()?;

        tags.sort_by(|a, b| a.version.compare(&b.version));
        tags.truncate(n);

        Ok(tags)
    }

    /// The first semver tag (in enumeration order) pointing at HEAD, if any
    pub fn current(&self) -> Result<Option<SemverTag>> {
        let head = self.repo.head_oid()?;
        let tags = self.repo.list_tags()?;

        Ok(tags
            .iter()
            .filter(|t| t.target == head)
            .find_map(SemverTag::from_ref))
    }
}
