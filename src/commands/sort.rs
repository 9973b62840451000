// src/commands/sort.rs
//! Sort source files in place, in check mode, or to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use miette::NamedSource;

use crate::cli::expand_paths;
use crate::errors::render_to_stderr;
use crate::fmt::{sort_source, SortConfig};

/// Options for sorting
pub struct SortOptions {
    /// Check only - don't modify files, exit 1 if any need sorting
    pub check: bool,
    /// Write to stdout instead of modifying files
    pub stdout: bool,
    pub config: SortConfig,
}

/// Sort source files.
///
/// - With no options: sort files in-place
/// - With --check: report which files need sorting, exit 1 if any
/// - With --stdout: write sorted output to stdout
/// - Use "-" to read from stdin and write to stdout
pub fn sort_files(patterns: &[String], options: SortOptions) -> ExitCode {
    // Handle stdin specially
    if patterns.len() == 1 && patterns[0] == "-" {
        return sort_stdin(&options);
    }

    let files = match expand_paths(patterns) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if files.is_empty() {
        eprintln!("error: no sortable files found");
        return ExitCode::FAILURE;
    }

    let mut needs_sorting: u32 = 0;
    let mut had_errors = false;

    for path in &files {
        match sort_single_file(path, &options) {
            Ok(changed) => {
                if changed && options.check {
                    // In check mode, print files that need sorting
                    println!("{}", path.display());
                    needs_sorting += 1;
                }
            }
            Err(()) => had_errors = true,
        }
    }

    if had_errors {
        return ExitCode::from(2);
    }

    if options.check && needs_sorting > 0 {
        eprintln!("{} file(s) need sorting", needs_sorting);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Sort a single file, reporting any error to stderr. Returns whether the
/// file was changed.
fn sort_single_file(path: &Path, options: &SortOptions) -> Result<bool, ()> {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: could not read: {}", path.display(), e);
            return Err(());
        }
    };

    let result = match sort_source(&source, &options.config) {
        Ok(r) => r,
        Err(e) => {
            let report = miette::Report::new(e)
                .with_source_code(NamedSource::new(path.display().to_string(), source));
            render_to_stderr(report.as_ref());
            return Err(());
        }
    };

    if options.stdout {
        print!("{}", result.output);
        Ok(result.changed)
    } else if options.check {
        Ok(result.changed)
    } else if result.changed {
        if let Err(e) = fs::write(path, &result.output) {
            eprintln!("{}: could not write: {}", path.display(), e);
            return Err(());
        }
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Sort source from stdin, write to stdout.
fn sort_stdin(options: &SortOptions) -> ExitCode {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: could not read stdin: {}", e);
        return ExitCode::from(2);
    }

    let result = match sort_source(&source, &options.config) {
        Ok(r) => r,
        Err(e) => {
            let report = miette::Report::new(e)
                .with_source_code(NamedSource::new("stdin", source));
            render_to_stderr(report.as_ref());
            return ExitCode::from(2);
        }
    };

    if options.check {
        if result.changed {
            eprintln!("stdin: not sorted");
            return ExitCode::FAILURE;
        }
    } else {
        print!("{}", result.output);
        let _ = io::stdout().flush();
    }

    ExitCode::SUCCESS
}
