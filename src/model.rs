use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    /// Creation time on the local clock.
    #[serde(rename = "time")]
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at: Local::now(),
        }
    }

    /// Not yet completed.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
