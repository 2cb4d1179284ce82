use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Projection parameters are invalid: {0}")]
    InvalidParameters(String),
}
