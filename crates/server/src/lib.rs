pub mod routes;
pub mod startup;
pub mod errors;
pub mod response;

pub use startup::run;
