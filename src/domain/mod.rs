pub mod authz;
pub mod errors;
pub mod models;
pub mod ports;
