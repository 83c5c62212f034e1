//! Strategy prompt builders.

use std::fmt::Write as _;

use framework_primitives::{Strategy, Task};
use tracing::debug;

use crate::error::PromptResult;
use crate::template::PromptTemplate;
use crate::templates::{
    CHAIN_OF_THOUGHT_INSTRUCTIONS, CONSENSUS_INSTRUCTIONS, CONSENSUS_INTRO, FEW_SHOT_PREAMBLE,
    FEW_SHOT_TASK_BLOCK, REFLECTION_CRITIQUE_PLACEHOLDER, REFLECTION_CRITIQUE_TEMPLATE,
    REFLECTION_INITIAL_INSTRUCTIONS, REFLECTION_REVISION_PLACEHOLDER, REFLECTION_REVISION_TEMPLATE,
    SELF_CONSISTENCY_INSTRUCTIONS, TREE_OF_THOUGHT_INSTRUCTIONS,
};

/// Builds the enhanced prompt for `strategy` from raw task text.
///
/// For [`Strategy::ReflectionRevision`] the result is a three-step preview;
/// the prompts actually sent are produced by the `reflection_*` builders.
///
/// # Errors
///
/// Returns a validation error if the task is empty or whitespace only.
pub fn build_prompt(strategy: Strategy, task: &str) -> PromptResult<String> {
    let task = Task::new(task)?;
    build_task_prompt(strategy, &task)
}

/// Parses `strategy` and builds its prompt.
///
/// # Errors
///
/// Returns a validation error for an unknown strategy identifier or an empty task.
pub fn build_prompt_by_name(strategy: &str, task: &str) -> PromptResult<String> {
    build_prompt(strategy.parse()?, task)
}

/// Builds the enhanced prompt for an already validated task.
///
/// # Errors
///
/// Returns [`crate::PromptError::Template`] if a fixed template fails to render.
pub fn build_task_prompt(strategy: Strategy, task: &Task) -> PromptResult<String> {
    let prompt = match strategy {
        Strategy::ChainOfThought => with_suffix(task, CHAIN_OF_THOUGHT_INSTRUCTIONS),
        Strategy::TreeOfThought => with_suffix(task, TREE_OF_THOUGHT_INSTRUCTIONS),
        Strategy::SelfConsistency => with_suffix(task, SELF_CONSISTENCY_INSTRUCTIONS),
        Strategy::FewShot => few_shot(task)?,
        Strategy::ReflectionRevision => reflection_preview(task),
    };
    debug!(strategy = strategy.slug(), len = prompt.len(), "built strategy prompt");
    Ok(prompt)
}

/// First reflection call: the task followed by a request for an answer.
#[must_use]
pub fn reflection_initial_prompt(task: &Task) -> String {
    with_suffix(task, REFLECTION_INITIAL_INSTRUCTIONS)
}

/// Second reflection call: asks for a critique of `initial_answer`.
///
/// # Errors
///
/// Returns [`crate::PromptError::Template`] if the template fails to render.
pub fn reflection_critique_prompt(task: &Task, initial_answer: &str) -> PromptResult<String> {
    let template = PromptTemplate::builder(REFLECTION_CRITIQUE_TEMPLATE)
        .require("task")
        .require("initial_answer")
        .build()?;
    Ok(template.render(&[("task", task.as_str()), ("initial_answer", initial_answer)])?)
}

/// Third reflection call: asks for a revision informed by `critique`.
///
/// # Errors
///
/// Returns [`crate::PromptError::Template`] if the template fails to render.
pub fn reflection_revision_prompt(
    task: &Task,
    initial_answer: &str,
    critique: &str,
) -> PromptResult<String> {
    let template = PromptTemplate::builder(REFLECTION_REVISION_TEMPLATE)
        .require("task")
        .require("initial_answer")
        .require("critique")
        .build()?;
    Ok(template.render(&[
        ("task", task.as_str()),
        ("initial_answer", initial_answer),
        ("critique", critique),
    ])?)
}

/// Consensus call for self-consistency: embeds every sample verbatim, in order.
#[must_use]
pub fn consensus_prompt<S: AsRef<str>>(task: &Task, samples: &[S]) -> String {
    let mut prompt = format!("{task}\n\n{CONSENSUS_INTRO}\n");
    for (index, sample) in samples.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(prompt, "\nAnswer {}:\n{}\n", index + 1, sample.as_ref());
    }
    prompt.push('\n');
    prompt.push_str(CONSENSUS_INSTRUCTIONS);
    prompt
}

fn with_suffix(task: &Task, suffix: &str) -> String {
    format!("{task}{suffix}")
}

fn few_shot(task: &Task) -> PromptResult<String> {
    let block = PromptTemplate::builder(FEW_SHOT_TASK_BLOCK)
        .require("task")
        .build()?;
    Ok(format!(
        "{FEW_SHOT_PREAMBLE}{}",
        block.render(&[("task", task.as_str())])?
    ))
}

fn reflection_preview(task: &Task) -> String {
    format!(
        "Step 1 - Initial Answer Prompt:\n{}\n\nStep 2 - Critique Prompt:\n{REFLECTION_CRITIQUE_PLACEHOLDER}\n\nStep 3 - Revision Prompt:\n{REFLECTION_REVISION_PLACEHOLDER}",
        reflection_initial_prompt(task)
    )
}
