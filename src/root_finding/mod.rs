// common helpers
pub mod errors;
pub mod status;
pub mod config;
pub mod report;
pub mod oracle;
pub(crate) mod batch;

// solver
pub mod newton;
