//! Small shared helpers used by the server and binary crates.

pub mod logging;
