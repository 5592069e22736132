//! PATH-based executable lookup

use std::env;
use std::path::{Path, PathBuf};

/// Full path of the first executable named `program` found on `PATH`
pub fn find_executable(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    find_in(program, env::split_paths(&paths))
}

/// Search `dirs` in order for an executable file named `program`
pub fn find_in<I, P>(program: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    dirs.into_iter()
        .map(|dir| dir.as_ref().join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
