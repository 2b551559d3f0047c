pub mod filter;

pub use filter::{JobFilter, JobType};
