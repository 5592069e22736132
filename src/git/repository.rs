use crate::domain::{CommitIdentity, TagRef};
use crate::error::{GitToolsError, Result};
use chrono::{DateTime, TimeZone, Utc};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref())?;
        debug!(git_dir = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Working directory, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

fn to_utc(time: git2::Time) -> DateTime<Utc> {
    Utc.timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_default()
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let references = self
            .repo
            .references_glob("refs/tags/*")
            .map_err(|e| GitToolsError::tag(format!("Cannot list tags: {}", e)))?;

        let mut tags = Vec::new();

        for reference in references {
            let reference =
                reference.map_err(|e| GitToolsError::tag(format!("Cannot read tag: {}", e)))?;

            let Some(name) = reference
                .name()
                .and_then(|full| full.strip_prefix("refs/tags/"))
            else {
                debug!("skipping tag reference with a non UTF-8 name");
                continue;
            };

            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRef::new(name, commit.id())),
                Err(e) => debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        debug!(count = tags.len(), "enumerated tags");
        Ok(tags)
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| GitToolsError::head(e.message().to_string()))?;

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitToolsError::head(format!("HEAD is not a commit: {}", e)))?;

        Ok(commit.id())
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<TagRef> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| GitToolsError::tag(format!("Cannot find commit {}: {}", oid, e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| GitToolsError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        debug!(tag = name, commit = %oid, "created tag");
        Ok(TagRef::new(name, oid))
    }

    fn commits(&self) -> Result<Vec<CommitIdentity>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push_glob("heads")?;
        revwalk.push_glob("remotes")?;
        revwalk.push_glob("tags")?;
        if self.repo.head().is_ok() {
            revwalk.push_head()?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let author = commit.author();
            let committer = commit.committer();

            commits.push(CommitIdentity {
                name: author.name().unwrap_or("unknown").to_string(),
                email: author.email().unwrap_or("unknown").to_string(),
                authored_at: to_utc(author.when()),
                committed_at: to_utc(committer.when()),
            });
        }

        Ok(commits)
    }

    fn current_branch(&self) -> Result<String> {
        // read HEAD symbolically so an unborn branch (first commit) still has a name
        let head = self
            .repo
            .find_reference("HEAD")
            .map_err(|e| GitToolsError::head(e.message().to_string()))?;

        let Some(target) = head.symbolic_target() else {
            return Err(GitToolsError::branch("HEAD is not pointing to a branch"));
        };

        target
            .strip_prefix("refs/heads/")
            .map(str::to_string)
            .ok_or_else(|| GitToolsError::branch(format!("HEAD points to {}, not a branch", target)))
    }

    fn hooks_dir(&self) -> Result<PathBuf> {
        let config = self.repo.config()?;

        if let Ok(path) = config.get_path("core.hooksPath") {
            if path.is_absolute() {
                return Ok(path);
            }

            let base = self.repo.workdir().unwrap_or_else(|| self.repo.path());
            return Ok(base.join(path));
        }

        Ok(self.repo.path().join("hooks"))
    }
}
