use thiserror::Error;

/// Reasons the hero cannot be started on a page.
#[derive(Debug, Error)]
pub enum HeroError {
    #[error("no window/document available")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a <canvas> element")]
    NotACanvas(String),
    #[error("2D context unavailable on #{0}")]
    NoContext2d(String),
}
