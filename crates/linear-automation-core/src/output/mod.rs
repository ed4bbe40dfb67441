//! Reporting back to the GitHub runner

pub mod commands;
pub mod host;
pub mod writer;

pub use host::GithubActionsHost;
pub use writer::OutputFileWriter;
