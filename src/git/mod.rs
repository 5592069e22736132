//! Repository access abstraction layer
//!
//! This module provides a trait-based abstraction over the repository
//! operations git-tools needs, allowing a real libgit2-backed implementation
//! and an in-memory one for tests.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! The tag engine is generic over [Repository]; construct a backend once and
//! pass it explicitly.
//!
//! ```rust
//! # use git_tools::git::Repository;
//! # use git_tools::tags::TagResolver;
//! # fn example<R: Repository>(repo: &R) -> git_tools::Result<()> {
//! let resolver = TagResolver::new(repo);
//! if let Some(tag) = resolver.current()? {
//!     println!("HEAD is released as {}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{CommitIdentity, TagRef};
use crate::error::Result;
use git2::Oid;
use std::path::PathBuf;

/// Repository operations consumed by the tag engine and the CLI
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to [crate::error::GitToolsError]
/// variants that name the failed operation.
///
/// ## Ordering
///
/// [Repository::list_tags] returns tags in the backend's own enumeration
/// order. Callers must not assume it is sorted by version.
pub trait Repository {
    /// Enumerate every tag with the commit it points at
    ///
    /// Annotated tags are resolved to their target commit.
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - All tags in backend enumeration order
    /// * `Err` - If the tag references cannot be read
    fn list_tags(&self) -> Result<Vec<TagRef>>;

    /// Resolve the commit HEAD currently points at
    ///
    /// # Returns
    /// * `Ok(Oid)` - The HEAD commit
    /// * `Err` - If HEAD is unborn or cannot be peeled to a commit
    fn head_oid(&self) -> Result<Oid>;

    /// Create a lightweight tag at the given commit
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `oid` - Commit to tag
    ///
    /// # Returns
    /// * `Ok(TagRef)` - The created reference
    /// * `Err` - If the tag already exists or the commit cannot be found
    fn create_tag(&self, name: &str, oid: Oid) -> Result<TagRef>;

    /// Author metadata for every commit reachable from a branch, remote-tracking
    /// branch, tag or HEAD
    fn commits(&self) -> Result<Vec<CommitIdentity>>;

    /// Short name of the branch HEAD points to
    ///
    /// # Returns
    /// * `Err` - If HEAD is detached
    fn current_branch(&self) -> Result<String>;

    /// Directory git reads hook scripts from
    fn hooks_dir(&self) -> Result<PathBuf>;
}
