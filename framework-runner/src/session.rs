//! State of one interactive session.

use std::num::NonZeroUsize;

use framework_adapters::completion::CompletionSettings;
use framework_primitives::{Mode, ModelId, Strategy, Temperature};
use framework_prompts::{PromptResult, build_prompt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::run::DEFAULT_SAMPLE_COUNT;
use crate::samples::{SampleError, sample_for};

/// Everything the interactive surface remembers between commands.
///
/// Nothing here is global: the surface owns the session and passes the
/// relevant fields to the builders and the runner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    mode: Mode,
    strategy: Strategy,
    previous_strategy: Option<Strategy>,
    basic_prompt: String,
    strategy_prompt: String,
    pending_clear: bool,
    settings: CompletionSettings,
    samples: NonZeroUsize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: Mode::Offline,
            strategy: Strategy::ChainOfThought,
            previous_strategy: None,
            basic_prompt: String::new(),
            strategy_prompt: String::new(),
            pending_clear: false,
            settings: CompletionSettings::default(),
            samples: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl Session {
    /// Creates a session with explicit starting values.
    #[must_use]
    pub fn new(mode: Mode, settings: CompletionSettings, samples: NonZeroUsize) -> Self {
        let mut session = Self {
            settings,
            samples,
            ..Self::default()
        };
        session.set_mode(mode);
        session
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Selected strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Contents of the basic prompt box.
    #[must_use]
    pub fn basic_prompt(&self) -> &str {
        &self.basic_prompt
    }

    /// Contents of the strategy prompt box.
    #[must_use]
    pub fn strategy_prompt(&self) -> &str {
        &self.strategy_prompt
    }

    /// Whether the user still has to answer the "clear prompts?" question.
    #[must_use]
    pub const fn pending_clear(&self) -> bool {
        self.pending_clear
    }

    /// Model and temperature for live runs. Offline replays ignore these.
    #[must_use]
    pub const fn settings(&self) -> CompletionSettings {
        self.settings
    }

    /// Self-consistency sample count.
    #[must_use]
    pub const fn samples(&self) -> NonZeroUsize {
        self.samples
    }

    /// Switches between offline and online mode.
    ///
    /// Entering online mode compares the current strategy with the last one
    /// seen online, so a change made while offline still raises the
    /// pending-clear question.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::Online {
            self.track_strategy(self.strategy);
        }
    }

    /// Selects a strategy.
    ///
    /// In online mode, switching away from a previously selected strategy
    /// while either prompt box has text raises the pending-clear question.
    /// Offline selections leave the previous strategy untouched.
    pub fn select_strategy(&mut self, strategy: Strategy) {
        if self.mode == Mode::Online {
            self.track_strategy(strategy);
        }
        self.strategy = strategy;
    }

    fn track_strategy(&mut self, strategy: Strategy) {
        if self.previous_strategy.is_some_and(|previous| previous != strategy)
            && (!self.basic_prompt.is_empty() || !self.strategy_prompt.is_empty())
        {
            debug!(
                from = ?self.previous_strategy,
                to = strategy.slug(),
                "strategy changed with text present"
            );
            self.pending_clear = true;
        }
        self.previous_strategy = Some(strategy);
    }

    /// Answers the pending-clear question; `confirm` empties both boxes.
    pub fn resolve_pending_clear(&mut self, confirm: bool) {
        if confirm {
            self.clear();
        }
        self.pending_clear = false;
    }

    /// Empties both prompt boxes.
    pub fn clear(&mut self) {
        self.basic_prompt.clear();
        self.strategy_prompt.clear();
    }

    /// Sets the basic prompt and, if the strategy prompt is empty, fills it
    /// from the new text.
    ///
    /// # Errors
    ///
    /// Propagates prompt-building failures; the basic prompt is still updated.
    pub fn set_basic_prompt(&mut self, text: impl Into<String>) -> PromptResult<()> {
        self.basic_prompt = text.into();
        self.autofill_strategy_prompt()
    }

    /// Replaces the strategy prompt with user-edited text.
    pub fn set_strategy_prompt(&mut self, text: impl Into<String>) {
        self.strategy_prompt = text.into();
    }

    /// Rebuilds the strategy prompt from the basic prompt for the current
    /// strategy, discarding edits.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the basic prompt is blank.
    pub fn regenerate_strategy_prompt(&mut self) -> PromptResult<()> {
        self.strategy_prompt = build_prompt(self.strategy, &self.basic_prompt)?;
        Ok(())
    }

    /// Loads the recorded example task for the current strategy into both boxes.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if no example is recorded for the strategy.
    pub fn load_sample(&mut self) -> Result<(), SampleError> {
        let entry = sample_for(self.strategy)?;
        self.strategy_prompt = entry.strategy_prompt()?;
        self.basic_prompt = entry.task().to_owned();
        Ok(())
    }

    /// Sets the model for live runs.
    pub fn set_model(&mut self, model: ModelId) {
        self.settings.model = model;
    }

    /// Sets the temperature for live runs.
    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.settings.temperature = temperature;
    }

    /// Sets the self-consistency sample count.
    pub fn set_samples(&mut self, samples: NonZeroUsize) {
        self.samples = samples;
    }

    /// Serializes the session for display.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which only occurs for non-finite floats.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn autofill_strategy_prompt(&mut self) -> PromptResult<()> {
        if self.strategy_prompt.is_empty() && !self.basic_prompt.trim().is_empty() {
            self.regenerate_strategy_prompt()?;
        }
        Ok(())
    }
}
