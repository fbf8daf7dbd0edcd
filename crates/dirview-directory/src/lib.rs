//! dirview-directory — read-only accessor over a hierarchical-graph directory.
//!
//! All reads flow through the [`Directory`] accessor, which translates local
//! object ids into fixed eventual-consistency requests against one
//! directory/schema pair and relays the service's response or error verbatim.
//! The remote calls themselves go through the [`DirectoryClient`] capability
//! trait; [`RestDirectoryClient`] is the HTTP implementation.

pub mod client;
pub mod directory;
pub mod rest;

pub use client::{DirectoryClient, DirectoryError};
pub use directory::Directory;
pub use rest::RestDirectoryClient;
