//! Static table of pre-recorded runs for offline mode.

use framework_adapters::completion::{CompletionOutcome, CompletionSettings};
use framework_primitives::{Mode, ModelId, Strategy, Task, Temperature};
use framework_prompts::{PromptError, build_task_prompt};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog;
use crate::report::{Intermediate, RunReport};

/// Errors raised by example lookups.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The table has no entry for the strategy.
    #[error("no sample found for strategy: {strategy}")]
    Missing {
        /// Strategy that was requested.
        strategy: Strategy,
    },

    /// The recorded task could not be turned into a strategy prompt.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

#[derive(Clone, Copy, Debug)]
enum RecordedIntermediate {
    Samples(&'static [&'static str]),
    Reflection {
        initial_answer: &'static str,
        critique: &'static str,
    },
}

/// A pre-recorded comparison.
#[derive(Clone, Copy, Debug)]
pub struct SampleEntry {
    strategy: Strategy,
    task: &'static str,
    basic_output: &'static str,
    strategy_output: &'static str,
    intermediate: Option<RecordedIntermediate>,
}

static ENTRIES: [SampleEntry; 5] = [
    SampleEntry {
        strategy: Strategy::ChainOfThought,
        task: catalog::CHAIN_OF_THOUGHT_TASK,
        basic_output: catalog::CHAIN_OF_THOUGHT_BASIC,
        strategy_output: catalog::CHAIN_OF_THOUGHT_OUTPUT,
        intermediate: None,
    },
    SampleEntry {
        strategy: Strategy::TreeOfThought,
        task: catalog::TREE_OF_THOUGHT_TASK,
        basic_output: catalog::TREE_OF_THOUGHT_BASIC,
        strategy_output: catalog::TREE_OF_THOUGHT_OUTPUT,
        intermediate: None,
    },
    SampleEntry {
        strategy: Strategy::SelfConsistency,
        task: catalog::SELF_CONSISTENCY_TASK,
        basic_output: catalog::SELF_CONSISTENCY_BASIC,
        strategy_output: catalog::SELF_CONSISTENCY_OUTPUT,
        intermediate: Some(RecordedIntermediate::Samples(
            &catalog::SELF_CONSISTENCY_SAMPLES,
        )),
    },
    SampleEntry {
        strategy: Strategy::FewShot,
        task: catalog::FEW_SHOT_TASK,
        basic_output: catalog::FEW_SHOT_BASIC,
        strategy_output: catalog::FEW_SHOT_OUTPUT,
        intermediate: None,
    },
    SampleEntry {
        strategy: Strategy::ReflectionRevision,
        task: catalog::REFLECTION_TASK,
        basic_output: catalog::REFLECTION_BASIC,
        strategy_output: catalog::REFLECTION_OUTPUT,
        intermediate: Some(RecordedIntermediate::Reflection {
            initial_answer: catalog::REFLECTION_INITIAL,
            critique: catalog::REFLECTION_CRITIQUE,
        }),
    },
];

/// Looks up the recorded example for `strategy`.
///
/// # Errors
///
/// Returns [`SampleError::Missing`] if the table has no such entry.
pub fn sample_for(strategy: Strategy) -> Result<&'static SampleEntry, SampleError> {
    ENTRIES
        .iter()
        .find(|entry| entry.strategy == strategy)
        .ok_or(SampleError::Missing { strategy })
}

impl SampleEntry {
    /// Strategy the entry demonstrates.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Recorded task, also used as the basic prompt.
    #[must_use]
    pub const fn task(&self) -> &'static str {
        self.task
    }

    /// Recorded answer to the basic prompt.
    #[must_use]
    pub const fn basic_output(&self) -> &'static str {
        self.basic_output
    }

    /// Recorded final answer of the strategy flow.
    #[must_use]
    pub const fn strategy_output(&self) -> &'static str {
        self.strategy_output
    }

    /// Strategy prompt built from the recorded task.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Prompt`] if the prompt cannot be built.
    pub fn strategy_prompt(&self) -> Result<String, SampleError> {
        let task = Task::new(self.task).map_err(PromptError::from)?;
        Ok(build_task_prompt(self.strategy, &task)?)
    }

    /// Recorded intermediate texts, for the multi-step strategies.
    #[must_use]
    pub fn intermediate(&self) -> Option<Intermediate> {
        self.intermediate.map(|entry| match entry {
            RecordedIntermediate::Samples(samples) => Intermediate::Samples {
                samples: samples.iter().copied().map(recorded).collect(),
            },
            RecordedIntermediate::Reflection {
                initial_answer,
                critique,
            } => Intermediate::Reflection {
                initial_answer: recorded(initial_answer),
                critique: recorded(critique),
                final_answer: recorded(self.strategy_output),
            },
        })
    }
}

fn recorded(text: &str) -> CompletionOutcome {
    CompletionOutcome::Completed {
        text: text.to_owned(),
    }
}

/// Replays the recorded example for `strategy` as a report.
///
/// # Errors
///
/// Returns [`SampleError`] if the entry is missing or its prompt cannot be built.
pub fn offline_report(strategy: Strategy) -> Result<RunReport, SampleError> {
    let entry = sample_for(strategy)?;
    Ok(RunReport {
        id: Uuid::new_v4(),
        mode: Mode::Offline,
        strategy,
        settings: CompletionSettings::new(ModelId::OFFLINE_DEFAULT, Temperature::default()),
        basic_prompt: entry.task.to_owned(),
        strategy_prompt: entry.strategy_prompt()?,
        basic_output: recorded(entry.basic_output),
        strategy_output: recorded(entry.strategy_output),
        intermediate: entry.intermediate(),
        calls: 0,
    })
}
