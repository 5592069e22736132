//! Pure formatting functions for command output.
//!
//! Everything here returns a `String` so the exact text can be tested;
//! printing happens in the parent module.

use crate::domain::{Author, SemverTag};
use crate::tags::Increment;

/// How `tag last` renders a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TagFormat {
    /// Tag name followed by the commit hash
    Full,
    /// Tag name only
    Tag,
}

/// `Increment tag component [<component>] from <old> => <new> (<hash>)`
pub fn format_increment(increment: &Increment) -> String {
    format!(
        "Increment tag component [{}] from {} => {} ({})",
        increment.component,
        increment.previous.name(),
        increment.created.name(),
        increment.created.commit_hash()
    )
}

/// Render a tag as `<name> (<hash>)` or `<name>`
pub fn format_tag(tag: &SemverTag, format: TagFormat) -> String {
    match format {
        TagFormat::Full => format!("{} ({})", tag.name(), tag.commit_hash()),
        TagFormat::Tag => tag.name().to_string(),
    }
}

/// Render the authors table with columns padded to the widest entry.
///
/// Widths are measured in characters, not bytes.
pub fn format_authors_table(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "No authors found\n".to_string();
    }

    let name_width = authors
        .iter()
        .map(|a| a.name.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or_default();
    let email_width = authors
        .iter()
        .map(|a| a.email.chars().count())
        .chain(std::iter::once("Email".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();

    out.push_str(&format!(
        "{:<nw$} | {:<ew$} | {}\n",
        "Name",
        "Email",
        "Commits",
        nw = name_width,
        ew = email_width
    ));
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(name_width),
        "-".repeat(email_width),
        "-".repeat("Commits".len())
    ));

    for author in authors {
        out.push_str(&format!(
            "{:<nw$} | {:<ew$} | {}\n",
            author.name,
            author.email,
            author.commits,
            nw = name_width,
            ew = email_width
        ));
    }

    out.push_str(&format!("\nTotal authors: {}\n", authors.len()));
    out
}
