use crate::error::{Result, UsageError};
use crate::output::{self, Format};
use crate::store::TaskStore;

pub fn run(store: &mut TaskStore, title: Option<String>, format: Format) -> Result<()> {
    let Some(title) = title else {
        return output::print_usage_error(&UsageError::MissingTitle, format);
    };
    let task = store.add_task(title)?;
    output::print_added(&task, format)
}
