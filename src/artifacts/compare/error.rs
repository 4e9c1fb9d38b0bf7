use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("cannot open input directory {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {path:?} as text")]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {path:?}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create output directory {path:?}")]
    OutputDirectoryFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid document template")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("cannot render document")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for CompareError {
    fn from(error: handlebars::TemplateError) -> Self {
        CompareError::Template(Box::new(error))
    }
}

impl CompareError {
    /// Message with the full chain of causes, `outer: inner: ...`
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);

        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        message
    }
}
