//! AST dump command - output the syntax tree as JSON

use anyhow::{bail, Context, Result};
use echoscript_runtime::ast::VersionedProgram;
use echoscript_runtime::{Lexer, Parser};
use std::fs;

/// Dump the versioned AST to stdout as JSON
///
/// Parses the source file without executing it. Diagnostics are reported to
/// stderr in JSON form, since this command exists for tooling.
pub fn run(file_path: &str, compact: bool) -> Result<()> {
    super::check_extension(file_path)?;

    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let tokens = match Lexer::new(source.as_str()).tokenize() {
        Ok(tokens) => tokens,
        Err(diagnostic) => {
            eprintln!("{}", diagnostic.with_file(file_path).to_json_string()?);
            bail!("Lexer errors")
        }
    };

    let program = match Parser::new(tokens).parse() {
        Ok(program) => program,
        Err(diagnostic) => {
            eprintln!("{}", diagnostic.with_file(file_path).to_json_string()?);
            bail!("Parse errors")
        }
    };

    let versioned = VersionedProgram::new(program);
    let json = if compact {
        serde_json::to_string(&versioned)?
    } else {
        versioned.to_json()?
    };
    println!("{}", json);

    Ok(())
}
