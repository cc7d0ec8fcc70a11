// CLI command implementations
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use sndtag::ParseOptions;
use tracing::debug;

use crate::cli::OutputFormatter;

/// Expand glob patterns; plain paths are passed through untouched.
pub fn expand_files(files: &[String]) -> anyhow::Result<Vec<String>> {
    let mut expanded = Vec::new();
    for file in files {
        if !file.contains(['*', '?', '[']) {
            expanded.push(file.clone());
            continue;
        }

        let before = expanded.len();
        for entry in glob::glob(file).with_context(|| format!("invalid pattern {}", file))? {
            let path = entry.with_context(|| format!("failed to expand {}", file))?;
            expanded.push(path.to_string_lossy().into_owned());
        }
        if expanded.len() == before {
            debug!(pattern = %file, "pattern matched no files");
        }
    }
    Ok(expanded)
}

/// Read metadata from files. Returns the number of files that failed.
pub fn command_read(
    files: &[String],
    output: Option<&PathBuf>,
    options: &ParseOptions,
    formatter: &OutputFormatter,
) -> anyhow::Result<usize> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut failed = 0;
    for file_path in expand_files(files)? {
        match sndtag::read_tags_from_path(&file_path, options)
            .with_context(|| format!("{}", file_path))
        {
            Ok(metadata) => formatter.output_metadata(&file_path, &metadata, &mut *writer)?,
            Err(e) => {
                formatter.print_error(&format!("{:#}", e));
                failed += 1;
            }
        }
    }

    writer.flush()?;
    Ok(failed)
}

/// Detect file formats. Returns the number of files that failed.
pub fn command_detect(files: &[String], formatter: &OutputFormatter) -> anyhow::Result<usize> {
    let mut failed = 0;
    for file_path in expand_files(files)? {
        match sndtag::detect_path(&file_path) {
            Ok(format) => formatter.print_info(&format!("{}: {}", file_path, format)),
            Err(e) => {
                formatter.print_error(&format!("{}: Unknown format ({})", file_path, e));
                failed += 1;
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass_through() {
        let files = vec!["does/not/exist.wav".to_string(), "b.wav".to_string()];
        assert_eq!(expand_files(&files).unwrap(), files);
    }

    #[test]
    fn test_pattern_without_matches_expands_to_nothing() {
        let files = vec!["/nonexistent-sndtag-dir/*.wav".to_string()];
        assert!(expand_files(&files).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(expand_files(&["[".to_string()]).is_err());
    }
}
