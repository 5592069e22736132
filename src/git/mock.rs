use crate::domain::{CommitIdentity, TagRef};
use crate::error::{GitToolsError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory repository for testing without actual git operations.
///
/// Tags are enumerated in insertion order, so tests control the backend
/// enumeration order explicitly.
pub struct MockRepository {
    tags: RefCell<Vec<TagRef>>,
    head: Option<Oid>,
    branch: Option<String>,
    commits: Vec<CommitIdentity>,
    hooks_dir: PathBuf,
}

impl MockRepository {
    /// Create a new empty mock repository with an unborn HEAD
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(Vec::new()),
            head: None,
            branch: None,
            commits: Vec::new(),
            hooks_dir: PathBuf::from(".git/hooks"),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.get_mut().push(TagRef::new(name, oid));
    }

    /// Point HEAD at a commit (detached until a branch is set)
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Attach HEAD to a named branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
    }

    /// Add a commit to the history walked for authors
    pub fn add_commit(&mut self, commit: CommitIdentity) {
        self.commits.push(commit);
    }

    pub fn set_hooks_dir(&mut self, dir: impl Into<PathBuf>) {
        self.hooks_dir = dir.into();
    }

    /// Snapshot of the tags currently stored
    pub fn tags(&self) -> Vec<TagRef> {
        self.tags.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| GitToolsError::head("reference 'refs/heads/main' not found"))
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<TagRef> {
        let mut tags = self.tags.borrow_mut();

        if tags.iter().any(|t| t.name == name) {
            return Err(GitToolsError::tag(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }

        let tag = TagRef::new(name, oid);
        tags.push(tag.clone());
        Ok(tag)
    }

    fn commits(&self) -> Result<Vec<CommitIdentity>> {
        Ok(self.commits.clone())
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| GitToolsError::branch("HEAD is not pointing to a branch"))
    }

    fn hooks_dir(&self) -> Result<PathBuf> {
        Ok(self.hooks_dir.clone())
    }
}
