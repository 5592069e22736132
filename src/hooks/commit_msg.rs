use crate::error::{GitToolsError, Result};
use std::fs;
use std::path::Path;

const BRANCH_PLACEHOLDER: &str = "{branch}";
const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Render a commit message through the configured template.
///
/// Returns `None` when the message already carries the rendered prefix (or,
/// for suffix-only templates, the rendered suffix), which happens on
/// `git commit --amend`.
pub fn render_commit_message(template: &str, branch: &str, message: &str) -> Result<Option<String>> {
    let Some((head, tail)) = template.split_once(MESSAGE_PLACEHOLDER) else {
        return Err(GitToolsError::hook(format!(
            "commit-msg template '{}' has no {} placeholder",
            template, MESSAGE_PLACEHOLDER
        )));
    };

    let prefix = head.replace(BRANCH_PLACEHOLDER, branch);
    let suffix = tail.replace(BRANCH_PLACEHOLDER, branch);

    let already_applied = if !prefix.is_empty() {
        message.starts_with(&prefix)
    } else {
        !suffix.trim().is_empty() && message.trim_end().ends_with(suffix.trim_end())
    };

    if already_applied {
        return Ok(None);
    }

    Ok(Some(format!("{}{}{}", prefix, message, suffix)))
}

/// Rewrite the commit message file git passes to the `commit-msg` hook.
///
/// Returns whether the file was changed.
pub fn rewrite_commit_msg_file(path: &Path, template: &str, branch: &str) -> Result<bool> {
    let message = fs::read_to_string(path).map_err(|e| {
        GitToolsError::hook(format!("Cannot read commit message {}: {}", path.display(), e))
    })?;

    match render_commit_message(template, branch, &message)? {
        Some(rewritten) => {
            fs::write(path, rewritten).map_err(|e| {
                GitToolsError::hook(format!(
                    "Cannot write commit message {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(true)
        }
        None => Ok(false),
    }
}
