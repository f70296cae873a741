use crate::error::Result;
use crate::output::{self, Format};
use crate::store::TaskStore;

pub fn run(store: &TaskStore, all: bool, format: Format) -> Result<()> {
    let tasks = store.list_tasks(all);
    tracing::debug!(shown = tasks.len(), all, "listing tasks");
    output::print_tasks(&tasks, format)
}
