/// Configuration subsystem - Editor settings and preferences
///
/// This module handles loading configuration from .trieditrc files,
/// providing centralized settings for the driver and the view.

pub mod rc;

// Re-export public interface
pub use rc::{ConfigError, RcConfig, RcLoader};
