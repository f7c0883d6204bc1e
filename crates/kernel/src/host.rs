//! Host-side output capabilities injected into the kernel.
//!
//! The host framework owns the render surface; the kernel asks for the
//! little it needs through this trait instead of writing anywhere itself.

/// Output surface the registry needs from the host.
pub trait HostUi {
    /// Emit a page-title heading into the host's output region.
    fn heading(&mut self, text: &str);
}

/// [`HostUi`] that drops all output, for hosts with no heading surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUi;

impl HostUi for NullUi {
    fn heading(&mut self, _text: &str) {}
}
