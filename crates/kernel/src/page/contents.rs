//! Page content entry points.

use std::fmt;

use anyhow::Result;

/// A named external unit that renders a page when asked.
///
/// Implementations expose exactly one zero-argument entry point, invoked
/// when the page is selected.
pub trait ContentModule {
    /// Render the page contents.
    fn load(&self) -> Result<()>;
}

/// Zero-argument page callback.
pub type ContentFn = Box<dyn Fn() -> Result<()>>;

/// Content entry point of a page.
///
/// The variant is fixed when the page is built; dispatch never inspects
/// capabilities at call time.
pub enum PageContents {
    /// A callback invoked directly.
    Callback(ContentFn),
    /// A module invoked through its `load()` entry point.
    Module(Box<dyn ContentModule>),
}

impl PageContents {
    /// Wrap a closure as page contents.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self::Callback(Box::new(f))
    }

    /// Wrap a content module as page contents.
    pub fn module<M>(module: M) -> Self
    where
        M: ContentModule + 'static,
    {
        Self::Module(Box::new(module))
    }

    /// Invoke the entry point. Content errors are returned as-is.
    pub fn invoke(&self) -> Result<()> {
        match self {
            Self::Callback(f) => f(),
            Self::Module(m) => m.load(),
        }
    }
}

impl fmt::Debug for PageContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("PageContents::Callback"),
            Self::Module(_) => f.write_str("PageContents::Module"),
        }
    }
}
