use crate::analysis::error::SeriesError;
use crate::registry::error::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighsAndLowsError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
