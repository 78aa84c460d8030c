pub mod client;
pub mod issues;
