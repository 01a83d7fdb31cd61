/// Core module for the setup tools
///
/// This module contains the setup script concatenator, the credential updater,
/// and the embedded defaults both of them run with.

pub mod concatenator;
pub mod credentials;
pub mod defaults;
