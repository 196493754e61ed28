use clap::{Parser, Subcommand};
use diff_scaffold::commands::scaffold::scaffold_command;
use diff_scaffold::commands::verify::verify_command;
use std::env;

#[derive(Parser)]
#[command(name = "diff-scaffold")]
#[command(about = "Generate the diff-analyser service skeleton", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the diff-analyser skeleton in the current directory
    Scaffold,

    /// Check an existing skeleton against the expected layout
    Verify {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = env::current_dir()?;

    // Bare invocation scaffolds; the subcommands are additive.
    match cli.command {
        None | Some(Commands::Scaffold) => scaffold_command(&cwd),
        Some(Commands::Verify { json }) => verify_command(&cwd, json),
    }
}
