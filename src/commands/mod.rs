pub mod add;
pub mod delete;
pub mod help;
pub mod lifecycle;
pub mod list;

use crate::error::UsageError;

/// Parse the id argument shared by `complete` and `delete`.
pub fn parse_task_id(input: Option<&str>) -> std::result::Result<u64, UsageError> {
    let input = input.ok_or(UsageError::MissingId)?;
    input
        .parse::<u64>()
        .map_err(|_| UsageError::InvalidId(input.to_string()))
}
