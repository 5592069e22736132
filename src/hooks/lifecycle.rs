use std::fmt;
use std::str::FromStr;

/// Git hooks that git-tools can install and execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookType {
    CommitMsg,
}

impl HookType {
    /// Every supported hook, in installation order
    pub const ALL: [HookType; 1] = [HookType::CommitMsg];

    /// Get the hook name as git expects it on disk
    pub fn name(&self) -> &'static str {
        match self {
            HookType::CommitMsg => "commit-msg",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HookType::ALL
            .into_iter()
            .find(|hook| hook.name() == s)
            .ok_or_else(|| format!("unsupported hook: {}", s))
    }
}
