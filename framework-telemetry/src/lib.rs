//! Observability utilities for the demo.

#![warn(missing_docs, clippy::pedantic)]

pub mod tracing_support;
