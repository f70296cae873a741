use serde_json::json;

use crate::error::{Result, UsageError};
use crate::output::{self, Format};

/// Usage line and description for every command.
pub const COMMANDS: &[(&str, &str)] = &[
    ("todo add <task title>", "Add a new task"),
    ("todo list", "List active tasks"),
    ("todo list --all", "List all tasks including completed"),
    ("todo complete <id>", "Mark a task as completed"),
    ("todo delete <id>", "Delete a task"),
    ("todo help", "Show available commands"),
];

pub fn render() -> String {
    let mut out = String::from("Commands\n");
    for (usage, description) in COMMANDS {
        out.push_str(&format!("  {usage:<26}{description}\n"));
    }
    out
}

pub fn run(format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let commands: Vec<_> = COMMANDS
                .iter()
                .map(|(usage, description)| json!({ "usage": usage, "description": description }))
                .collect();
            println!("{}", serde_json::to_string(&json!({ "commands": commands }))?);
        }
        Format::Pretty => print!("{}", render()),
    }
    Ok(())
}

pub fn invalid(command: &str, format: Format) -> Result<()> {
    tracing::debug!(command, "unrecognized command");
    output::print_usage_error(&UsageError::InvalidCommand(command.to_string()), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_line_up() {
        let text = render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Commands");
        assert_eq!(lines[1], "  todo add <task title>     Add a new task");
        assert_eq!(lines[3], "  todo list --all           List all tasks including completed");
        assert_eq!(lines.len(), 1 + COMMANDS.len());
    }
}
