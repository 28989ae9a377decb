//! Configuration module for LootLock
//!
//! This module provides configuration management including:
//! - Storage root resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LootLockPaths;
pub use settings::Settings;
