//! Completion adapters used by the demo runner.
//!
//! Providers implement [`traits::ModelAdapter`]; callers that only need the
//! final text go through [`completion::complete`], which never fails and
//! reports provider errors as [`completion::CompletionOutcome::Failed`].

#![warn(missing_docs, clippy::pedantic)]

pub mod completion;
pub mod openai;
pub mod traits;
