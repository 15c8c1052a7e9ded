//! Configuration module for fintally
//!
//! Engine-level settings supplied by the caller. The engine performs no
//! file or environment lookup of its own.

pub mod settings;

pub use settings::EngineConfig;
