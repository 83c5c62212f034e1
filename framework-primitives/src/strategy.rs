//! Prompting strategies compared against a basic prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named prompting technique.
///
/// The declaration order is the order strategies are presented to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Step-by-step reasoning.
    ChainOfThought,
    /// Multi-branch exploration followed by an evaluation.
    TreeOfThought,
    /// Repeated sampling followed by a consensus pass.
    SelfConsistency,
    /// Example-conditioned prompting.
    FewShot,
    /// Initial answer, critique, then revision.
    ReflectionRevision,
}

impl Strategy {
    /// Every strategy, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::ChainOfThought,
        Self::TreeOfThought,
        Self::SelfConsistency,
        Self::FewShot,
        Self::ReflectionRevision,
    ];

    /// Human-readable name shown in headings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ChainOfThought => "Chain of Thought",
            Self::TreeOfThought => "Tree of Thought",
            Self::SelfConsistency => "Self-Consistency",
            Self::FewShot => "Few-Shot",
            Self::ReflectionRevision => "Reflection & Revision",
        }
    }

    /// Short identifier accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ChainOfThought => "chain-of-thought",
            Self::TreeOfThought => "tree-of-thought",
            Self::SelfConsistency => "self-consistency",
            Self::FewShot => "few-shot",
            Self::ReflectionRevision => "reflection-revision",
        }
    }

    /// Returns `true` when a run issues more than one strategy call.
    #[must_use]
    pub const fn is_multi_step(self) -> bool {
        matches!(self, Self::SelfConsistency | Self::ReflectionRevision)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parses either the display name or the slug, ignoring case and
    /// surrounding whitespace.
    fn from_str(input: &str) -> Result<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| {
                strategy.slug().eq_ignore_ascii_case(needle)
                    || strategy.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownStrategy {
                name: input.to_owned(),
            })
    }
}
