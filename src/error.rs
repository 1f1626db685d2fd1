//! Error types for Derivar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid scalar value: {0} is not finite")]
    InvalidValue(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
