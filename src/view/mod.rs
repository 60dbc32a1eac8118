/// View subsystem - Rendering of editor state
///
/// This module turns buffer snapshots and status messages into terminal
/// output, independent of how the buffer stores its text.

pub mod renderer;

// Re-export public interface
pub use renderer::View;
