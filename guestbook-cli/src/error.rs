use thiserror::Error;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown invite: {0}")]
    UnknownInvite(String),

    /// The file could not be turned into an importable guest list.
    #[error("{0}")]
    Sheet(String),

    #[error("Import refused: {0}")]
    Import(#[from] guestbook_import::ImportError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn unknown_invite(id: impl Into<String>) -> Self {
        Self::UnknownInvite(id.into())
    }

    pub(crate) fn sheet(msg: impl Into<String>) -> Self {
        Self::Sheet(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<guestbook_db::StoreError> for CliError {
    fn from(e: guestbook_db::StoreError) -> Self {
        Self::database(e.to_string())
    }
}

impl From<guestbook_db::OperationError> for CliError {
    fn from(e: guestbook_db::OperationError) -> Self {
        Self::database(e.to_string())
    }
}
