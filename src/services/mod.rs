//! Core services for reading the revision, checking the cache, and writing the header

pub mod cache;
pub mod header;
pub mod revision;
pub mod runner;
