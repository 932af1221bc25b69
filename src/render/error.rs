use thiserror::Error;

/// Renderer error type
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no guests in the guest list")]
    EmptyGuestList,

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
