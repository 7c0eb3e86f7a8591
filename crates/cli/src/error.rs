// crates/cli/src/error.rs
use changed_files_shared_kernel::{ChangedFilesError, DomainError, PresentationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] ChangedFilesError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 2 for caller mistakes (bad arguments, no patterns), 3 for failures of
    /// git, the file system or serialization.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(err) if err.is_configuration() => 2,
            _ => 3,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl From<PresentationError> for AppError {
    fn from(err: PresentationError) -> Self {
        Self::Core(err.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
