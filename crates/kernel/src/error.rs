//! Navigation error types.

use thiserror::Error;

/// Errors surfaced by the page registry and render pass.
#[derive(Debug, Error)]
pub enum TocError {
    /// No currently-visible page carries the requested title. Reachable
    /// when the selection comes from a stale render pass, e.g. the viewer
    /// identity changed between menu render and selection.
    #[error("no visible page titled \"{0}\"")]
    PageNotFound(String),

    /// Two pages visible to the same viewer share a title. The title is
    /// the selection key handed back by the menu widget, so this is
    /// rejected when the registry is built.
    #[error("duplicate page title \"{0}\" among visible pages")]
    DuplicateTitle(String),

    /// A page's content entry point failed; passed through unmodified.
    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

/// Result type alias using TocError.
pub type TocResult<T> = Result<T, TocError>;
