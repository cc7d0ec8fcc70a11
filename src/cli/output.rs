// Output formatting for CLI

use std::io::Write;

use sndtag::Metadata;

use crate::cli::OutputFormat;

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output one file's metadata
    pub fn output_metadata(&self, file: &str, metadata: &Metadata, writer: &mut dyn Write) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(writer, "{}", serde_json::to_string_pretty(&Self::document(file, metadata))?)?;
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(&Self::document(file, metadata))?)?;
            }
            OutputFormat::KeyValue => {
                writeln!(writer, "file: {}", file)?;
                for (key, value) in metadata {
                    writeln!(writer, "{}: {}", key, value)?;
                }
                writeln!(writer)?;
            }
            OutputFormat::Table => {
                self.output_table(file, metadata, writer)?;
            }
        }
        Ok(())
    }

    fn document(file: &str, metadata: &Metadata) -> serde_json::Value {
        serde_json::json!({
            "file": file,
            "metadata": metadata,
        })
    }

    /// Output as table
    fn output_table(&self, file: &str, metadata: &Metadata, writer: &mut dyn Write) -> anyhow::Result<()> {
        let max_key_len = metadata.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let rule = "=".repeat(max_key_len + 30);

        writeln!(writer, "{}", file)?;
        writeln!(writer, "{}", rule)?;
        for (key, value) in metadata {
            writeln!(writer, "{:<width$}{}", format!("{}:", key), value, width = max_key_len + 2)?;
        }
        writeln!(writer, "{}", rule)?;
        Ok(())
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("  {}", message);
        }
    }
}
