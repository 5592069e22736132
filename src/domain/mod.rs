//! Domain logic - pure types independent of git operations

pub mod author;
pub mod tag;
pub mod version;

pub use author::{aggregate_authors, Author, CommitIdentity};
pub use tag::{SemverTag, TagRef};
pub use version::{Component, SemVersion};
