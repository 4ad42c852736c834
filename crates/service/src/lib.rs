//! Service layer for the gated options lookup.
//! - `settings`: the store seam, `file`: its JSON-file implementation.
//! - `options`: access gate, restriction policy and evaluator.
//! - `admin`: the two configuration commands and the settings view.

pub mod errors;
pub mod settings;
pub mod storage;
pub mod file;
pub mod options;
pub mod admin;
#[cfg(test)]
pub mod test_support;
