// src/error.rs
use precompiler_shared_kernel::{PrecompilerError, PresentationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] precompiler_engine::error::EngineError),

    #[error(transparent)]
    Precompiler(#[from] PrecompilerError),
}

impl From<derive_builder::UninitializedFieldError> for AppError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Precompiler(PresentationError::ConfigBuildFailed(err.to_string()).into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
