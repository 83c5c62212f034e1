//! Live comparison runs.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use framework_adapters::completion::{CompletionOutcome, CompletionSettings, complete};
use framework_adapters::traits::ModelAdapter;
use framework_primitives::{Mode, Strategy, Task};
use framework_prompts::{
    PromptError, consensus_prompt, reflection_critique_prompt, reflection_initial_prompt,
    reflection_revision_prompt,
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::report::{Intermediate, RunReport};

/// Result alias for run orchestration.
pub type RunResult<T> = Result<T, RunError>;

/// Validation failures that abort a run before any call is issued.
#[derive(Debug, Error)]
pub enum RunError {
    /// The basic prompt (the task) is blank.
    #[error("Please enter a Basic Prompt.")]
    EmptyBasicPrompt,

    /// The strategy prompt is blank.
    #[error("Please enter a {strategy} Prompt.")]
    EmptyStrategyPrompt {
        /// Strategy whose prompt is missing.
        strategy: Strategy,
    },

    /// A follow-up prompt could not be built.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Samples drawn per self-consistency run unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(count) => count,
    None => unreachable!(),
};

/// Issues the completion calls of a comparison, one at a time.
///
/// The adapter is shared and never mutated; each run keeps its own state.
pub struct DemoRunner {
    adapter: Arc<dyn ModelAdapter>,
    settings: CompletionSettings,
    samples: NonZeroUsize,
}

impl fmt::Debug for DemoRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoRunner")
            .field("provider", &self.adapter.metadata().provider())
            .field("settings", &self.settings)
            .field("samples", &self.samples)
            .finish()
    }
}

/// Strategy half of a run.
struct StrategyRun {
    output: CompletionOutcome,
    intermediate: Option<Intermediate>,
}

impl DemoRunner {
    /// Creates a runner issuing calls through `adapter`.
    #[must_use]
    pub fn new(adapter: Arc<dyn ModelAdapter>, settings: CompletionSettings) -> Self {
        Self {
            adapter,
            settings,
            samples: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Sets the number of self-consistency samples.
    #[must_use]
    pub fn with_samples(mut self, samples: NonZeroUsize) -> Self {
        self.samples = samples;
        self
    }

    /// Model and temperature used for every call.
    #[must_use]
    pub const fn settings(&self) -> CompletionSettings {
        self.settings
    }

    /// Self-consistency sample count.
    #[must_use]
    pub const fn samples(&self) -> NonZeroUsize {
        self.samples
    }

    /// Runs the basic prompt, then the strategy flow.
    ///
    /// `strategy_prompt` is the (possibly edited) enhanced prompt. It is sent
    /// as-is for single-call strategies and for every self-consistency sample.
    /// Reflection runs build their three prompts from the task instead.
    ///
    /// Call failures do not abort the run; they appear as failed outcomes in
    /// the report and are forwarded as text into later prompts.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] if either prompt is blank.
    pub async fn run(
        &self,
        strategy: Strategy,
        basic_prompt: &str,
        strategy_prompt: &str,
    ) -> RunResult<RunReport> {
        let task = Task::new(basic_prompt).map_err(|_| RunError::EmptyBasicPrompt)?;
        if strategy_prompt.trim().is_empty() {
            return Err(RunError::EmptyStrategyPrompt { strategy });
        }

        let id = Uuid::new_v4();
        info!(
            run_id = %id,
            strategy = strategy.slug(),
            model = %self.settings.model,
            temperature = %self.settings.temperature,
            "starting comparison run"
        );

        let mut calls = 0;
        let basic_output = self.call(&mut calls, "basic", task.as_str()).await;
        let StrategyRun {
            output,
            intermediate,
        } = self
            .run_strategy(&mut calls, strategy, &task, strategy_prompt)
            .await?;

        info!(run_id = %id, calls, "comparison run finished");

        Ok(RunReport {
            id,
            mode: Mode::Online,
            strategy,
            settings: self.settings,
            basic_prompt: task.into(),
            strategy_prompt: strategy_prompt.to_owned(),
            basic_output,
            strategy_output: output,
            intermediate,
            calls,
        })
    }

    async fn run_strategy(
        &self,
        calls: &mut usize,
        strategy: Strategy,
        task: &Task,
        strategy_prompt: &str,
    ) -> RunResult<StrategyRun> {
        match strategy {
            Strategy::ChainOfThought | Strategy::TreeOfThought | Strategy::FewShot => {
                Ok(StrategyRun {
                    output: self.call(calls, strategy.slug(), strategy_prompt).await,
                    intermediate: None,
                })
            }
            Strategy::SelfConsistency => {
                Ok(self.self_consistency(calls, task, strategy_prompt).await)
            }
            Strategy::ReflectionRevision => self.reflection(calls, task).await,
        }
    }

    async fn self_consistency(
        &self,
        calls: &mut usize,
        task: &Task,
        sample_prompt: &str,
    ) -> StrategyRun {
        let mut samples = Vec::with_capacity(self.samples.get());
        for _ in 0..self.samples.get() {
            samples.push(self.call(calls, "sample", sample_prompt).await);
        }

        let texts: Vec<String> = samples.iter().map(CompletionOutcome::display_text).collect();
        let prompt = consensus_prompt(task, &texts);
        let output = self.call(calls, "consensus", &prompt).await;

        StrategyRun {
            output,
            intermediate: Some(Intermediate::Samples { samples }),
        }
    }

    async fn reflection(&self, calls: &mut usize, task: &Task) -> RunResult<StrategyRun> {
        let initial = self.call(calls, "initial", &reflection_initial_prompt(task)).await;

        let critique_prompt = reflection_critique_prompt(task, &initial.display_text())?;
        let critique = self.call(calls, "critique", &critique_prompt).await;

        let revision_prompt = reflection_revision_prompt(
            task,
            &initial.display_text(),
            &critique.display_text(),
        )?;
        let output = self.call(calls, "revision", &revision_prompt).await;

        Ok(StrategyRun {
            intermediate: Some(Intermediate::Reflection {
                initial_answer: initial,
                critique,
                final_answer: output.clone(),
            }),
            output,
        })
    }

    async fn call(&self, calls: &mut usize, phase: &str, prompt: &str) -> CompletionOutcome {
        *calls += 1;
        debug!(phase, call = *calls, len = prompt.len(), "issuing completion call");
        complete(self.adapter.as_ref(), prompt, self.settings).await
    }
}
