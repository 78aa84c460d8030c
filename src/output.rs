use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const OUTPUT_DELIMITER: &str = "TASKSPLIT_EOF";

pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        eprintln!("Failed to write to stdout: {e}");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}

/// Formats a named output in the runner's multi-line file syntax.
pub fn format_output(name: &str, value: &str) -> String {
    format!("{name}<<{OUTPUT_DELIMITER}\n{value}\n{OUTPUT_DELIMITER}\n")
}

/// Publishes a named output for later workflow steps.
///
/// Appends to the runner's output file when one is configured, otherwise
/// prints `name=value`.
pub fn set_output(
    name: &str,
    value: &str,
    path: Option<&Path>,
    writer: &mut Option<&mut dyn Write>,
) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open output file {}", path.display()))?;
            file.write_all(format_output(name, value).as_bytes())
                .context("Failed to write output")?;
        }
        None => println(&format!("{name}={value}"), writer)?,
    }
    Ok(())
}

/// Marks the run as failed with `message`.
pub fn fail(message: &str) {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    let _ = println(&format!("::error::{escaped}"), &mut None);
}
