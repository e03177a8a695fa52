//! CLI command implementations
//!
//! This module contains all CLI command implementations plus the stdin/stdout
//! plumbing they share. A path of `-` means stdin or stdout.

pub mod anonymize;
pub mod deanonymize;
pub mod init;
pub mod validate;

use crate::domain::ReduxerError;
use anyhow::Context;
use std::io::{Read, Write};
use std::path::Path;

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read a whole text file, or stdin for `-`
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdio(path) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

/// Write text to a file, or stdout for `-`
pub fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if is_stdio(path) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

/// Print a configuration error and return the configuration exit code
pub fn config_error_exit(error: &ReduxerError) -> i32 {
    crate::log_error_with_context!(error, "Failed to load configuration");
    eprintln!("❌ Failed to load configuration");
    eprintln!("   Error: {error}");
    2
}
