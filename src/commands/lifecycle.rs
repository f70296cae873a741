use crate::error::Result;
use crate::output::{self, Format, Outcome};
use crate::store::TaskStore;

use super::parse_task_id;

pub fn complete(store: &mut TaskStore, id: Option<String>, format: Format) -> Result<()> {
    let id = match parse_task_id(id.as_deref()) {
        Ok(id) => id,
        Err(err) => return output::print_usage_error(&err, format),
    };
    let outcome = if store.complete_task(id)? {
        Outcome::Completed(id)
    } else {
        Outcome::NotFound(id)
    };
    output::print_outcome(outcome, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn completes_existing_task() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo.json");
        let mut store = TaskStore::open(&path).unwrap();
        store.add_task("a").unwrap();
        complete(&mut store, Some("1".into()), Format::Json).unwrap();
        assert!(TaskStore::open(&path).unwrap().tasks()[0].completed);
    }

    #[test]
    fn bad_ids_do_not_fail() {
        let dir = tempdir().unwrap();
        let mut store = TaskStore::open(dir.path().join("todo.json")).unwrap();
        store.add_task("a").unwrap();
        complete(&mut store, None, Format::Json).unwrap();
        complete(&mut store, Some("one".into()), Format::Json).unwrap();
        complete(&mut store, Some("9".into()), Format::Json).unwrap();
        assert!(!store.tasks()[0].completed);
    }
}
