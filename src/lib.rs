#[macro_use]
extern crate anyhow;

pub mod cli;
pub mod corpus;
pub mod download;
pub mod error;
pub mod logging;

pub use download::{Outcome, ensure_local_copy};
pub use error::FetchError;
