//! Hero directory: maps numeric hero ids to display names.
//!
//! The directory is fetched once from the OpenDota API (or read from a
//! local file) and only used to relabel table columns.

pub mod client;
pub mod types;

pub use client::{load_directory_file, HeroClient};
pub use types::{HeroDirectory, HeroEntry};
