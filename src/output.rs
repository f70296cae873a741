use clap::ValueEnum;
use colored::Colorize;
use serde_json::json;

use crate::error::{Result, UsageError};
use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

/// What a `complete` or `delete` did to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed(u64),
    Deleted(u64),
    NotFound(u64),
}

pub const NO_TASKS: &str = "No tasks available";

pub fn status_marker(task: &Task) -> &'static str {
    if task.completed { "[✓]" } else { "[ ]" }
}

/// Fixed-width task table: header, separator, one row per task.
pub fn render_table(tasks: &[&Task]) -> String {
    let mut out = String::from(" ID | Status | Title\n");
    out.push_str(&"-".repeat(37));
    out.push('\n');
    for task in tasks {
        out.push_str(&format!(
            " {:>2} |   {}  | {}\n",
            task.id,
            status_marker(task),
            task.title
        ));
    }
    out
}

pub fn print_added(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(task)?),
        Format::Pretty => println!("{} {}", "Added task".green(), task.title),
    }
    Ok(())
}

pub fn print_tasks(tasks: &[&Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty if tasks.is_empty() => println!("{NO_TASKS}"),
        Format::Pretty => print!("{}", render_table(tasks)),
    }
    Ok(())
}

pub fn print_outcome(outcome: Outcome, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let value = match outcome {
                Outcome::Completed(id) => json!({ "id": id, "completed": true }),
                Outcome::Deleted(id) => json!({ "id": id, "deleted": true }),
                Outcome::NotFound(id) => json!({
                    "error": "task_not_found",
                    "message": format!("Task {id} not found"),
                }),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
        Format::Pretty => match outcome {
            Outcome::Completed(id) => println!("{}", format!("Marked task {id} as completed").green()),
            Outcome::Deleted(id) => println!("{}", format!("Deleted task {id}").green()),
            Outcome::NotFound(id) => println!("{}", format!("Task {id} not found").yellow()),
        },
    }
    Ok(())
}

/// Report a bad command line on stdout. Not an error as far as the exit
/// status is concerned.
pub fn print_usage_error(err: &UsageError, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let value = json!({ "error": err.code(), "message": err.to_string() });
            println!("{}", serde_json::to_string(&value)?);
        }
        Format::Pretty => match err {
            UsageError::InvalidCommand(_) => println!("{err}"),
            _ => println!("{} {err}", "Error:".red().bold()),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str, completed: bool) -> Task {
        let mut task = Task::new(id, title.into());
        task.completed = completed;
        task
    }

    #[test]
    fn table_has_header_separator_and_rows() {
        let a = task(1, "buy milk", false);
        let b = task(12, "walk dog", true);
        let table = render_table(&[&a, &b]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], " ID | Status | Title");
        assert_eq!(lines[1], "-".repeat(37));
        assert_eq!(lines[2], "  1 |   [ ]  | buy milk");
        assert_eq!(lines[3], " 12 |   [✓]  | walk dog");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn wide_ids_are_not_truncated() {
        let t = task(1234, "x", false);
        assert!(render_table(&[&t]).contains(" 1234 |   [ ]  | x"));
    }

    #[test]
    fn status_marker_reflects_completion() {
        assert_eq!(status_marker(&task(1, "a", false)), "[ ]");
        assert_eq!(status_marker(&task(1, "a", true)), "[✓]");
    }
}
