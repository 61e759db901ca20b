pub mod mutation;
pub mod normalize;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("External call failed: {0}")]
    ExternalCall(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
