use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Source root is not a directory: {0}")]
    RootMissing(String),

    #[error("Path is not valid UTF-8: {0}")]
    NonUnicodePath(String),

    #[error("Filename table requires ASCII paths, got: {0}")]
    NonAsciiPath(String),
}
