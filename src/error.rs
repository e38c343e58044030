use crate::template::TemplateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a conversion can fail, one variant per pipeline stage.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?} is not a valid Go identifier")]
    InvalidIdentifier(String),

    #[error("failed to open input file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading input {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template parsing error: {0}")]
    TemplateParse(#[source] TemplateError),

    #[error("template execution error: {0}")]
    TemplateExecution(#[source] TemplateError),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidIdentifier,
    Open,
    Read,
    TemplateParse,
    TemplateExecution,
    CreateDirectory,
    Write,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            Error::Open { .. } => ErrorKind::Open,
            Error::Read { .. } => ErrorKind::Read,
            Error::TemplateParse(_) => ErrorKind::TemplateParse,
            Error::TemplateExecution(_) => ErrorKind::TemplateExecution,
            Error::CreateDirectory { .. } => ErrorKind::CreateDirectory,
            Error::Write { .. } => ErrorKind::Write,
        }
    }
}
