/// Supabase setup tools - database script assembly and credential rotation
///
/// This library backs two small command-line utilities: one that stitches the
/// ordered SQL fragments into a single setup script, and one that swaps the
/// Supabase URL and anon key across the app's source files.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export the main entry points for convenience
pub use crate::config::{load_config, SetupConfig};
pub use crate::core::concatenator::{ConcatReport, SetupConcatenator};
pub use crate::core::credentials::{CredentialUpdate, Rewrite, UpdateSummary};
pub use crate::error::SetupError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
