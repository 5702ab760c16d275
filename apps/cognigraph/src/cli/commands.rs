//! # CLI Command Implementations

use cognigraph::script::{QueryOutput, ScriptRunner, demo_script, parse_script};
use cognigraph_core::{CogniGraphError, GraphConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum script size (10 MB).
///
/// This prevents memory exhaustion from accidental large files.
const MAX_SCRIPT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate that `path` is an existing regular file no larger than `max_size`.
fn validate_file(path: &Path, max_size: u64) -> Result<PathBuf, CogniGraphError> {
    let canonical = path.canonicalize().map_err(|e| {
        CogniGraphError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(CogniGraphError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| CogniGraphError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > max_size {
        return Err(CogniGraphError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }

    Ok(canonical)
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Run the Neuron/Concept walkthrough.
pub fn cmd_demo(config: GraphConfig, json_mode: bool) -> Result<(), CogniGraphError> {
    let mut runner = ScriptRunner::new(config);
    let outputs = runner.run(&demo_script())?;
    print_outputs(&outputs, json_mode)
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Execute a JSON operation script.
pub fn cmd_run(file: &Path, config: GraphConfig, json_mode: bool) -> Result<(), CogniGraphError> {
    let path = validate_file(file, MAX_SCRIPT_FILE_SIZE)?;
    let text = std::fs::read_to_string(&path)
        .map_err(|e| CogniGraphError::IoError(format!("Cannot read script: {}", e)))?;
    let operations = parse_script(&text)?;
    tracing::info!(path = %path.display(), operations = operations.len(), "running script");

    let mut runner = ScriptRunner::new(config);
    let outputs = runner.run(&operations)?;
    print_outputs(&outputs, json_mode)
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Print query outputs to stdout.
fn print_outputs(outputs: &[QueryOutput], json_mode: bool) -> Result<(), CogniGraphError> {
    let stdout = std::io::stdout();
    write_outputs(&mut stdout.lock(), outputs, json_mode)
        .map_err(|e| CogniGraphError::IoError(format!("Cannot write output: {}", e)))
}

/// Render query outputs as pretty JSON or as indented text.
fn write_outputs<W: Write>(
    out: &mut W,
    outputs: &[QueryOutput],
    json_mode: bool,
) -> io::Result<()> {
    if json_mode {
        serde_json::to_writer_pretty(&mut *out, outputs)?;
        return writeln!(out);
    }

    for output in outputs {
        match output {
            QueryOutput::Attributes { id, attributes } => {
                writeln!(out, "Attributes of {}:", id)?;
                writeln!(out, "  {}", serde_json::to_string(attributes)?)?;
            }
            QueryOutput::Relationships { id, relationships } => {
                writeln!(out, "Relationships of {}:", id)?;
                if relationships.is_empty() {
                    writeln!(out, "  (none)")?;
                }
                for rel in relationships {
                    writeln!(
                        out,
                        "  {} -[{}]- {}  weight={}",
                        id, rel.relationship_type, rel.neighbor, rel.weight
                    )?;
                }
            }
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
