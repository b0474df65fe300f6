//! CLI command implementations for the passtrack binary.

pub mod track_cmd;
