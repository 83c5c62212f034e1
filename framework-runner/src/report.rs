//! Results of a comparison run.

use framework_adapters::completion::{CompletionOutcome, CompletionSettings};
use framework_primitives::{Mode, Strategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Calls made on the way to the final strategy output, kept for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intermediate {
    /// Independent self-consistency samples, in the order they were drawn.
    Samples {
        /// Outcome of each sample call.
        samples: Vec<CompletionOutcome>,
    },
    /// The three reflection phases.
    Reflection {
        /// Answer to the initial prompt.
        initial_answer: CompletionOutcome,
        /// Critique of the initial answer.
        critique: CompletionOutcome,
        /// Revised answer.
        final_answer: CompletionOutcome,
    },
}

impl Intermediate {
    /// Tab labels paired with their outcome, in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<(String, &CompletionOutcome)> {
        match self {
            Self::Samples { samples } => samples
                .iter()
                .enumerate()
                .map(|(index, sample)| (format!("Sample {}", index + 1), sample))
                .collect(),
            Self::Reflection {
                initial_answer,
                critique,
                final_answer,
            } => vec![
                ("Initial Answer".to_owned(), initial_answer),
                ("Critique".to_owned(), critique),
                ("Final Answer".to_owned(), final_answer),
            ],
        }
    }

    /// Returns `true` if any intermediate call failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.sections()
            .iter()
            .any(|(_, outcome)| !outcome.is_completed())
    }
}

/// Side-by-side comparison of a basic prompt and a strategy prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub(crate) id: Uuid,
    pub(crate) mode: Mode,
    pub(crate) strategy: Strategy,
    pub(crate) settings: CompletionSettings,
    pub(crate) basic_prompt: String,
    pub(crate) strategy_prompt: String,
    pub(crate) basic_output: CompletionOutcome,
    pub(crate) strategy_output: CompletionOutcome,
    pub(crate) intermediate: Option<Intermediate>,
    pub(crate) calls: usize,
}

impl RunReport {
    /// Identifier used to correlate log lines of one run.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the run was replayed or live.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Strategy compared against the basic prompt.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Model and temperature of the run.
    #[must_use]
    pub const fn settings(&self) -> CompletionSettings {
        self.settings
    }

    /// The unmodified task.
    #[must_use]
    pub fn basic_prompt(&self) -> &str {
        &self.basic_prompt
    }

    /// The enhanced prompt shown next to the basic one.
    #[must_use]
    pub fn strategy_prompt(&self) -> &str {
        &self.strategy_prompt
    }

    /// Response to the basic prompt.
    #[must_use]
    pub fn basic_output(&self) -> &CompletionOutcome {
        &self.basic_output
    }

    /// Final response of the strategy flow.
    #[must_use]
    pub fn strategy_output(&self) -> &CompletionOutcome {
        &self.strategy_output
    }

    /// Intermediate texts, for multi-step strategies.
    #[must_use]
    pub fn intermediate(&self) -> Option<&Intermediate> {
        self.intermediate.as_ref()
    }

    /// Completion calls issued; zero for replays.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }

    /// Returns `true` if any call of the run failed, intermediate calls
    /// included.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.basic_output.is_completed()
            || !self.strategy_output.is_completed()
            || self
                .intermediate
                .as_ref()
                .is_some_and(Intermediate::has_failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(text: &str) -> CompletionOutcome {
        CompletionOutcome::Completed { text: text.into() }
    }

    fn report_with(intermediate: Option<Intermediate>) -> RunReport {
        RunReport {
            id: Uuid::nil(),
            mode: Mode::Online,
            strategy: Strategy::SelfConsistency,
            settings: CompletionSettings::default(),
            basic_prompt: "task".into(),
            strategy_prompt: "task, carefully".into(),
            basic_output: done("basic"),
            strategy_output: done("consensus"),
            intermediate,
            calls: 5,
        }
    }

    #[test]
    fn sample_sections_are_numbered() {
        let intermediate = Intermediate::Samples {
            samples: vec![done("a"), done("b")],
        };
        let sections = intermediate.sections();
        assert_eq!(sections[0], ("Sample 1".to_owned(), &done("a")));
        assert_eq!(sections[1], ("Sample 2".to_owned(), &done("b")));
    }

    #[test]
    fn reflection_sections_follow_phase_order() {
        let intermediate = Intermediate::Reflection {
            initial_answer: done("first"),
            critique: done("meh"),
            final_answer: done("better"),
        };
        let labels: Vec<_> = intermediate
            .sections()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, ["Initial Answer", "Critique", "Final Answer"]);
    }

    #[test]
    fn failed_sample_marks_report_failed() {
        let clean = report_with(Some(Intermediate::Samples {
            samples: vec![done("a"), done("b")],
        }));
        assert!(!clean.has_failures());

        let failed = report_with(Some(Intermediate::Samples {
            samples: vec![
                done("a"),
                CompletionOutcome::Failed {
                    reason: "timeout".into(),
                },
            ],
        }));
        assert!(failed.has_failures());
    }

    #[test]
    fn failed_critique_marks_report_failed() {
        let report = report_with(Some(Intermediate::Reflection {
            initial_answer: done("first"),
            critique: CompletionOutcome::Failed {
                reason: "503".into(),
            },
            final_answer: done("consensus"),
        }));
        assert!(report.has_failures());
    }
}
