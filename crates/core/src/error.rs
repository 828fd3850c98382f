use thiserror::Error;
use tsbridge_template::TemplateError;

#[derive(Error, Debug)]
pub enum TsbridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template transform error: {0}")]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, TsbridgeError>;
