use anyhow::Result;
use clap::{Parser, Subcommand};
use lit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "lit",
    version = "0.1.0",
    about = "A minimal local version-control engine",
    long_about = "Lit tracks file contents by hash, stages changes, records \
    immutable commit snapshots, and can restore the working directory to any \
    prior commit. Single branch, single working directory, single user."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged files as a commit")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
        #[arg(index = 2, help = "The commit author")]
        author: String,
    },
    #[command(name = "log", about = "Show commit history, oldest first")]
    Log,
    #[command(name = "status", about = "Show HEAD and the staged files")]
    Status,
    #[command(name = "remove", about = "Unstage a file")]
    Remove {
        #[arg(index = 1, help = "The file to unstage")]
        file: String,
    },
    #[command(name = "checkout", about = "Restore the working directory to a commit")]
    Checkout {
        #[arg(index = 1, help = "The commit hash to restore")]
        hash: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let mut repository =
        Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message, author } => repository.commit(message, author)?,
        Commands::Log => repository.log()?,
        Commands::Status => repository.status()?,
        Commands::Remove { file } => repository.remove(file)?,
        Commands::Checkout { hash } => repository.checkout(hash)?,
    }

    Ok(())
}
