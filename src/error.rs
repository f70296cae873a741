use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("failed to decode task file '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt task file '{0}': {1}")]
    Corrupt(String, String),

    #[error("invalid task file path '{0}'")]
    InvalidPath(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode_error",
            Self::Corrupt(_, _) => "corrupt_file",
            Self::InvalidPath(_) => "invalid_path",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

/// Problems with the command line itself. These are reported to the user
/// and never abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Missing task title")]
    MissingTitle,

    #[error("Missing task ID")]
    MissingId,

    #[error("Invalid task ID")]
    InvalidId(String),

    #[error("{0} is not a valid command. See 'todo help'")]
    InvalidCommand(String),
}

impl UsageError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTitle => "missing_title",
            Self::MissingId => "missing_id",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidCommand(_) => "invalid_command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_messages_match_cli_text() {
        assert_eq!(UsageError::MissingTitle.to_string(), "Missing task title");
        assert_eq!(UsageError::InvalidId("x".into()).to_string(), "Invalid task ID");
        assert_eq!(
            UsageError::InvalidCommand("frob".into()).to_string(),
            "frob is not a valid command. See 'todo help'"
        );
    }

    #[test]
    fn store_error_codes_are_stable() {
        let io = TodoError::from(std::io::Error::other("boom"));
        assert_eq!(io.code(), "io_error");
        let corrupt = TodoError::Corrupt("todo.json".into(), "duplicate task id 1".into());
        assert_eq!(corrupt.code(), "corrupt_file");
        assert_eq!(
            corrupt.to_string(),
            "corrupt task file 'todo.json': duplicate task id 1"
        );
    }
}
