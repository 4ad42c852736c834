//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed map that concrete settings stores wrap.

pub mod json_map_store;
