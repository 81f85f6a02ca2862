use thiserror::Error;

#[derive(Error, Debug)]
pub enum YardproofError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog is empty - load products before matching")]
    EmptyCatalog,

    #[error("Invalid product record: {0}")]
    InvalidProduct(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No images found in: {0}")]
    NoImagesFound(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YardproofError>;
