use crate::error::{GitToolsError, Result};
use crate::hooks::HookType;
use crate::which;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Marker written into every generated script
pub const GENERATED_MARKER: &str = "## NOTE: Code-Generated";

/// Suffix appended to a user's hook file when it is moved aside
pub const BACKUP_SUFFIX: &str = "__backup";

/// Program name looked up on PATH before falling back to the running binary
const PROGRAM_NAME: &str = "gt";

/// Result of installing one hook
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledHook {
    pub hook: HookType,
    pub path: PathBuf,
    /// Where the previous, user-written hook was copied, if there was one
    pub backup: Option<PathBuf>,
}

/// Installs generated hook scripts that call back into `gt`
pub struct HookInstaller {
    hooks_dir: PathBuf,
    executable: String,
}

impl HookInstaller {
    /// Create an installer writing into `hooks_dir` and invoking `executable`
    pub fn new(hooks_dir: impl Into<PathBuf>, executable: impl Into<String>) -> Self {
        HookInstaller {
            hooks_dir: hooks_dir.into(),
            executable: executable.into(),
        }
    }

    /// `gt` when it is on PATH, otherwise the absolute path of this binary
    pub fn resolve_executable() -> Result<String> {
        if which::find_executable(PROGRAM_NAME).is_some() {
            return Ok(PROGRAM_NAME.to_string());
        }

        let current = std::env::current_exe()
            .map_err(|e| GitToolsError::hook(format!("Cannot locate executable: {}", e)))?;
        Ok(current.display().to_string())
    }

    /// Install every supported hook
    pub fn install_all(&self) -> Result<Vec<InstalledHook>> {
        HookType::ALL
            .into_iter()
            .map(|hook| self.install(hook))
            .collect()
    }

    /// Install one hook, backing up a user-written file first.
    ///
    /// A file previously generated by this installer is overwritten without
    /// a backup so the user's original backup is never clobbered.
    pub fn install(&self, hook: HookType) -> Result<InstalledHook> {
        fs::create_dir_all(&self.hooks_dir)?;

        let path = self.hooks_dir.join(hook.name());
        let backup_path = self
            .hooks_dir
            .join(format!("{}{}", hook.name(), BACKUP_SUFFIX));

        let backup = if backup_file(&path, &backup_path)? {
            info!(hook = hook.name(), backup = %backup_path.display(), "backed up existing hook");
            Some(backup_path)
        } else {
            None
        };

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let script = render_script(
            hook,
            &self.executable,
            backup.as_deref().map(|b| (path.as_path(), b, timestamp.as_str())),
        );

        // replace a symlinked hook itself, never its target
        if fs::symlink_metadata(&path).is_ok() {
            fs::remove_file(&path).map_err(|e| {
                GitToolsError::hook(format!("Cannot remove {}: {}", path.display(), e))
            })?;
        }

        fs::write(&path, script)
            .map_err(|e| GitToolsError::hook(format!("Cannot write {}: {}", path.display(), e)))?;
        make_executable(&path)?;

        debug!(hook = hook.name(), path = %path.display(), "installed hook");

        Ok(InstalledHook { hook, path, backup })
    }
}

/// Render the shell script for a hook.
///
/// `backup` is `(hook path, backup path, timestamp)` when a user hook was moved aside.
pub fn render_script(
    hook: HookType,
    executable: &str,
    backup: Option<(&Path, &Path, &str)>,
) -> String {
    let mut script = String::new();

    script.push_str("#!/bin/sh\n\n");
    script.push_str(GENERATED_MARKER);
    script.push('\n');
    script.push_str("## This file was created automatically by git-tools (gt)\n\n");

    if let Some((hook_path, backup_path, timestamp)) = backup {
        script.push_str(&format!(
            "# hook file ({}) is backed up into ({}) at ({})\n\n",
            hook_path.display(),
            backup_path.display(),
            timestamp
        ));
    }

    script.push_str(&format!(
        "if command -v \"{exe}\" >/dev/null 2>&1; then\n  \"{exe}\" hooks exec {hook} \"$1\"\nelse\n  echo \"Can't find git-tools (gt binary)\"\n  exit 1\nfi\n",
        exe = executable,
        hook = hook.name()
    ));

    script
}

/// Copy `source` to `dest` when it exists and was not generated by us.
///
/// Returns whether a backup was made.
fn backup_file(source: &Path, dest: &Path) -> Result<bool> {
    let content = match fs::read(source) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(GitToolsError::hook(format!(
                "Cannot read {}: {}",
                source.display(),
                e
            )))
        }
    };

    if String::from_utf8_lossy(&content).contains(GENERATED_MARKER) {
        return Ok(false);
    }

    fs::copy(source, dest).map_err(|e| {
        GitToolsError::hook(format!(
            "Cannot back up {} into {}: {}",
            source.display(),
            dest.display(),
            e
        ))
    })?;

    Ok(true)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
