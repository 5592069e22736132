//! Git hooks that call back into `gt`
//!
//! - commit-msg: rewrites the commit message with the current branch name

pub mod commit_msg;
pub mod install;
pub mod lifecycle;

pub use commit_msg::{render_commit_message, rewrite_commit_msg_file};
pub use install::{HookInstaller, InstalledHook};
pub use lifecycle::HookType;
