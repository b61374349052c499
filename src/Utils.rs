//! different utility modules used throughout the project
/// tiny module to set up console and file logging
pub mod logger;
/// settings of the interactive loop and the batch mode, read from a TOML file
pub mod config;
