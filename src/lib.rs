pub mod application;
pub mod cli;
pub mod domain;

pub use application::{EntryFlow, Screen, Summary};
pub use domain::*;
