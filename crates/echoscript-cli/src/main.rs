use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

mod commands;
mod config;

/// EchoScript interpreter.
///
/// EchoScript is a small dynamically typed scripting language with functions,
/// print output, and arithmetic over mixed value types. This CLI runs
/// scripts and dumps their syntax tree for tooling.
///
/// EXAMPLES:
///     escript run hello.es         Run an EchoScript program
///     escript run hello.es --json  Report diagnostics as JSON
///     escript ast hello.es         Print the AST as JSON
///
/// ENVIRONMENT VARIABLES:
///     ESCRIPT_DIAGNOSTICS  Set to 'json' for JSON diagnostics by default
#[derive(Parser)]
#[command(name = "escript")]
#[command(version)]
#[command(propagate_version = true)]
#[command(after_help = "For more information, see: https://github.com/echoscript-lang/echoscript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an EchoScript source file
    ///
    /// Executes the script and prints each buffered output line to stdout.
    /// The file must carry the `.es` extension.
    ///
    /// EXAMPLES:
    ///     escript run main.es             Run a program
    ///     escript run main.es --json      Output diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the EchoScript source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Dump AST to JSON
    ///
    /// Parses the source file without running it and outputs the versioned
    /// Abstract Syntax Tree in JSON format for tooling or debugging.
    ///
    /// EXAMPLES:
    ///     escript ast main.es              Print AST (pretty)
    ///     escript ast main.es --compact    Single-line JSON
    ///     escript ast main.es > ast.json   Save to file
    Ast {
        /// Path to the EchoScript source file
        file: String,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs shell completion scripts for bash, zsh, fish, or powershell.
    /// Redirect to a file and source it in your shell configuration.
    ///
    /// EXAMPLES:
    ///     escript completions bash > ~/.bash_completions/escript.bash
    ///     escript completions zsh > ~/.zfunc/_escript
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();

    match cli.command {
        Commands::Run { file, json } => {
            // Command-line flag overrides environment variable
            let use_json = json || cli_config.default_json;
            commands::run::run(&file, use_json)?;
        }
        Commands::Ast { file, compact } => {
            commands::ast::run(&file, compact)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
