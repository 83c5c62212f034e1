//! Prompt construction for the supported prompting strategies.
//!
//! Every builder is a pure function of its inputs: the same task always yields
//! byte-identical prompt text.

#![warn(missing_docs, clippy::pedantic)]

pub mod builder;
pub mod template;
pub mod templates;

mod error;

pub use builder::{
    build_prompt, build_prompt_by_name, build_task_prompt, consensus_prompt,
    reflection_critique_prompt, reflection_initial_prompt, reflection_revision_prompt,
};
pub use error::{PromptError, PromptResult};
pub use template::{PromptTemplate, TemplateBuilder, TemplateError, TemplateResult};
