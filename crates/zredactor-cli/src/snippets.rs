//! Snippet sources for the `snippets` command

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Collect snippets from positional values or a newline-delimited file
///
/// clap guarantees exactly one of the two is present. File lines are trimmed
/// and blank lines dropped; positional values are used verbatim.
pub fn load_snippets(positional: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    match file {
        Some(path) => read_snippet_file(path),
        None => Ok(positional),
    }
}

fn read_snippet_file(path: &Path) -> Result<Vec<String>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snippets from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet file {}", path.display()))?
    };

    Ok(parse_snippet_lines(&content))
}

pub fn parse_snippet_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
