//! Command handlers
//!
//! Each handler owns the user-facing policy for its command (guards, output,
//! exit status) and delegates the work to the library.

use anyhow::{bail, Context, Result};
use git_tools::config::Config;
use git_tools::domain::{aggregate_authors, Component};
use git_tools::git::Repository;
use git_tools::hooks::{rewrite_commit_msg_file, HookInstaller, HookType};
use git_tools::tags::{lint, Incrementor, TagResolver};
use git_tools::ui::{self, TagFormat};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::{Commands, ExecHook, HooksAction, InstallTarget, TagAction};

/// Dispatch a parsed command
pub fn execute<R: Repository>(command: Commands, repo: &R, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Tag { action } => match action {
            TagAction::Increment { component } => {
                tag_increment(
                    repo,
                    config,
                    component.component(),
                    component.args().ignore_exists_tag,
                )?;
            }
            TagAction::Last { format } => tag_last(repo, format)?,
        },
        Commands::Lint => {
            if lint_tags(repo, config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Authors => authors(repo)?,
        Commands::Hooks { action } => match action {
            HooksAction::List => hooks_list(),
            HooksAction::Install {
                target: InstallTarget::All,
            } => hooks_install_all(repo)?,
            HooksAction::Exec {
                hook: ExecHook::CommitMsg { file },
            } => hooks_exec_commit_msg(repo, config, &file)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Tag HEAD with the next version, refusing when HEAD is already released
pub fn tag_increment<R: Repository>(
    repo: &R,
    config: &Config,
    component: Component,
    ignore_exists_tag: bool,
) -> Result<()> {
    let current = TagResolver::new(repo)
        .current()
        .context("cannot get current tag")?;

    if let Some(tag) = current {
        if !ignore_exists_tag {
            bail!(
                "semver tag already exists at HEAD: {} (use --ignore-exists-tag to add another)",
                tag
            );
        }
        ui::display_warning(&format!("HEAD is already tagged with {}", tag));
    }

    let increment = Incrementor::new(repo)
        .with_initial_v_prefix(config.tags.initial_v_prefix)
        .increment(component)
        .with_context(|| format!("cannot increment {}", component))?;

    println!("{}", ui::format_increment(&increment));
    Ok(())
}

/// Print the highest semver tag
pub fn tag_last<R: Repository>(repo: &R, format: TagFormat) -> Result<()> {
    let max = TagResolver::new(repo)
        .max()
        .context("cannot get max tag")?;

    println!("{}", ui::format_tag(&max, format));
    Ok(())
}

/// Print one line per anomaly; returns whether any were found
pub fn lint_tags<R: Repository>(repo: &R, config: &Config) -> Result<bool> {
    let window = config.lint.effective_window();
    let tags = TagResolver::new(repo)
        .top_n(window)
        .context("cannot list semver tags")?;

    debug!(inspected = tags.len(), window, "linting tags");

    let report = lint(&tags);
    for finding in report.findings() {
        println!("{}", finding);
    }

    Ok(report.has_anomalies())
}

/// Print commit counts per author
pub fn authors<R: Repository>(repo: &R) -> Result<()> {
    let commits = repo.commits().context("cannot get authors")?;
    let authors = aggregate_authors(&commits);

    print!("{}", ui::format_authors_table(&authors));
    Ok(())
}

pub fn hooks_list() {
    for hook in HookType::ALL {
        println!("{}", hook);
    }
}

pub fn hooks_install_all<R: Repository>(repo: &R) -> Result<()> {
    let hooks_dir = repo.hooks_dir().context("cannot locate hooks directory")?;
    let executable = HookInstaller::resolve_executable()?;
    debug!(executable = %executable, "resolved hook executable");

    let installed = HookInstaller::new(hooks_dir, executable)
        .install_all()
        .context("cannot install hooks")?;

    for hook in installed {
        if let Some(backup) = &hook.backup {
            ui::display_status(&format!(
                "Existing {} hook backed up to {}",
                hook.hook,
                backup.display()
            ));
        }
        ui::display_success(&format!("Hook was installed: {}", hook.path.display()));
    }

    Ok(())
}

pub fn hooks_exec_commit_msg<R: Repository>(repo: &R, config: &Config, file: &Path) -> Result<()> {
    let branch = repo
        .current_branch()
        .context("cannot get current branch")?;

    let changed = rewrite_commit_msg_file(file, &config.hooks.commit_msg.template, &branch)?;
    debug!(branch = %branch, changed, "commit-msg hook done");

    Ok(())
}
