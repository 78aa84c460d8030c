//! Splits an issue's unchecked checklist into tracking issues and links
//! them back into the parent issue body.

pub mod checklist;
pub mod config;
pub mod context;
pub mod github;
pub mod output;
pub mod run;
pub mod split;
