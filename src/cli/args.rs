//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use git_tools::domain::Component;
use git_tools::ui::TagFormat;
use std::path::PathBuf;

/// Git tools - semver tags, tag linting, authors and hooks
#[derive(Parser, Debug)]
#[command(name = "gt")]
#[command(version, about = "Git tools: semver tags, tag linting, authors and hooks", long_about = None)]
pub struct Cli {
    /// Path to the repository you want to manage
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Custom configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage tags
    #[command(visible_alias = "t")]
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Check the tag history for mixed prefix styles and doubly tagged commits
    #[command(visible_alias = "l")]
    Lint,

    /// List all commit authors
    #[command(visible_alias = "a")]
    Authors,

    /// Install and run git hooks
    #[command(visible_alias = "h")]
    Hooks {
        #[command(subcommand)]
        action: HooksAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TagAction {
    /// Find the last semver tag and increment the given component
    #[command(visible_alias = "i")]
    Increment {
        #[command(subcommand)]
        component: ComponentCommand,
    },

    /// Show the last semver tag
    #[command(visible_alias = "l")]
    Last {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = TagFormat::Full)]
        format: TagFormat,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ComponentCommand {
    /// Increment the major part of semver
    #[command(visible_alias = "maj")]
    Major(IncrementArgs),

    /// Increment the minor part of semver
    #[command(visible_alias = "min")]
    Minor(IncrementArgs),

    /// Increment the patch part of semver
    #[command(visible_alias = "pat")]
    Patch(IncrementArgs),
}

impl ComponentCommand {
    pub fn component(&self) -> Component {
        match self {
            ComponentCommand::Major(_) => Component::Major,
            ComponentCommand::Minor(_) => Component::Minor,
            ComponentCommand::Patch(_) => Component::Patch,
        }
    }

    pub fn args(&self) -> &IncrementArgs {
        match self {
            ComponentCommand::Major(args)
            | ComponentCommand::Minor(args)
            | ComponentCommand::Patch(args) => args,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct IncrementArgs {
    /// Add a new semver tag even when HEAD already has one
    #[arg(long)]
    pub ignore_exists_tag: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HooksAction {
    /// List available hooks
    #[command(visible_alias = "l")]
    List,

    /// Install gt as the git hook program
    #[command(visible_alias = "i")]
    Install {
        #[command(subcommand)]
        target: InstallTarget,
    },

    /// Execute a hook (called from the installed hook scripts)
    Exec {
        #[command(subcommand)]
        hook: ExecHook,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    /// Install all supported git hooks
    #[command(visible_alias = "a")]
    All,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExecHook {
    /// Prefix the commit message with the current branch
    CommitMsg {
        /// Commit message file passed by git
        file: PathBuf,
    },
}
