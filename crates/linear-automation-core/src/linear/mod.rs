//! Linear issue tracker integration

pub mod client;
pub mod response;

pub use client::LinearClient;
