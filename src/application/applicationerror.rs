use thiserror::Error;

use crate::math::numericserror::NumericsError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Numerics(#[from] NumericsError),

    #[error("cannot write results: {0}")]
    IOError(#[from] std::io::Error),
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
