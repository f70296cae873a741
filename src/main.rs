use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use todo::output::Format;
use todo::store::TaskStore;

const DEFAULT_FILE: &str = "todo.json";

// Flags go before the command, so everything after `add` is title.
#[derive(Parser)]
#[command(
    name = "todo",
    version,
    about = "Track short tasks in a local file",
    disable_help_subcommand = true
)]
struct Cli {
    /// Task file to read and write
    #[arg(long, short = 'f', default_value = DEFAULT_FILE)]
    file: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    format: Format,
    /// Shorthand for --format json
    #[arg(long, hide = true)]
    json: bool,
    /// More log output on stderr (repeatable)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Task(TaskCommand),
    /// Show available commands
    Help,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Commands that read and write the task file.
#[derive(Subcommand)]
enum TaskCommand {
    /// Add a new task
    #[command(disable_help_flag = true)]
    Add {
        /// Task title, taken verbatim; several words are joined with spaces
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// List active tasks
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },
    /// Mark a task as completed
    Complete {
        /// Task ID to complete
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },
}

fn join_title(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn run(cli: Cli, format: Format) -> todo::error::Result<()> {
    // Commands that never touch the task file
    let command = match cli.command {
        None | Some(Commands::Help) => return todo::commands::help::run(format),
        Some(Commands::Other(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            return todo::commands::help::invalid(name, format);
        }
        Some(Commands::Task(command)) => command,
    };

    let mut store = TaskStore::open(&cli.file)?;

    match command {
        TaskCommand::Add { title } => {
            todo::commands::add::run(&mut store, join_title(title), format)
        }
        TaskCommand::List { all } => todo::commands::list::run(&store, all, format),
        TaskCommand::Complete { id } => {
            todo::commands::lifecycle::complete(&mut store, id, format)
        }
        TaskCommand::Delete { id } => todo::commands::delete::run(&mut store, id, format),
    }
}

fn main() {
    let cli = Cli::parse();
    todo::logging::init(cli.verbose);
    let format = if cli.json { Format::Json } else { cli.format };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            Format::Pretty => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
