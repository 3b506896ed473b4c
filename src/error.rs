
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitbagError {
    #[error("Cannot reduce an empty collection without an initial value")]
    EmptyReduce,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, KitbagError>;
