//! Filesystem helpers for the Zellij plugin sandbox, where the host's home directory
//! is mounted under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
