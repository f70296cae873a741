use crate::error::Result;
use crate::output::{self, Format, Outcome};
use crate::store::TaskStore;

use super::parse_task_id;

pub fn run(store: &mut TaskStore, id: Option<String>, format: Format) -> Result<()> {
    let id = match parse_task_id(id.as_deref()) {
        Ok(id) => id,
        Err(err) => return output::print_usage_error(&err, format),
    };
    let outcome = if store.delete_task(id)? {
        Outcome::Deleted(id)
    } else {
        Outcome::NotFound(id)
    };
    output::print_outcome(outcome, format)
}
