//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the engine
//! configuration from TOML files. A loaded `Configuration` is the read-only
//! settings snapshot that queries capture when they are admitted.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **query**: Top list cap, scan timeout, worker pool size, single-flight policy
//! - **share**: Share code cooldown, time-to-live, cache bounds, permission node
//! - **player_filter**: Which known players take part in population scans
//! - **data**: Locations of the vocabulary and player directory files
//!
//! # Example
//!
//! ```rust,ignore
//! use playerstats::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (single-flight policy, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving/validation.
pub mod impls;
