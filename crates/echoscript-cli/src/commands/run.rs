//! Run command - execute EchoScript source files

use anyhow::{bail, Context, Result};
use echoscript_runtime::{Diagnostic, EchoScript};
use std::fs;

/// Run an EchoScript source file
///
/// Executes the script and prints its buffered output to stdout. On failure
/// the first diagnostic goes to stderr and the process exits nonzero.
pub fn run(file_path: &str, json: bool) -> Result<()> {
    super::check_extension(file_path)?;

    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let runtime = EchoScript::new();
    match runtime.run(&source) {
        Ok(output) => {
            for line in output {
                println!("{}", line);
            }
            Ok(())
        }
        Err(diagnostic) => {
            report(&diagnostic.with_file(file_path), json);
            bail!("Failed to execute {}", file_path)
        }
    }
}

/// Print a diagnostic to stderr in the requested format
fn report(diagnostic: &Diagnostic, json: bool) {
    if json {
        match diagnostic.to_json_string() {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprint!("{}", diagnostic.to_human_string()),
        }
    } else {
        // The human rendering already ends with a newline
        eprint!("{}", diagnostic.to_human_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn script_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".es").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_run_simple_script() {
        let file = script_file("println(1 + 2);");
        let result = run(file.path().to_str().unwrap(), false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_failing_script() {
        let file = script_file("println(1 / 0);");
        let result = run(file.path().to_str().unwrap(), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_missing_file() {
        let result = run("nonexistent.es", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_rejects_wrong_extension() {
        let err = run("main.txt", false).unwrap_err();
        assert_eq!(err.to_string(), "The file must have a .es extension.");
    }
}
