//! Comparison runs for the prompt framework demo.
//!
//! [`DemoRunner`] performs live runs against a [`ModelAdapter`], the
//! [`samples`] table replays pre-recorded runs, and [`Session`] holds the
//! state of one interactive session.
//!
//! [`ModelAdapter`]: framework_adapters::traits::ModelAdapter

#![warn(missing_docs, clippy::pedantic)]

pub mod report;
pub mod run;
pub mod samples;
pub mod session;

mod catalog;

pub use report::{Intermediate, RunReport};
pub use run::{DemoRunner, RunError, RunResult};
pub use samples::{SampleEntry, SampleError, offline_report, sample_for};
pub use session::Session;
