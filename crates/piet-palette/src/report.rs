//! Reporting sink for pipeline progress.
//!
//! The pipeline never prints anything itself. Every observable step is
//! announced through a [`Reporter`]; the application decides whether that
//! becomes console output, structured logs or a JSON document.

use std::fmt;

use crate::classify::{FamilyListing, HueMismatch};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Enumerating,
    HueSorting,
    LightnessSorting,
    Associating,
    Remapping,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Enumerating => "enumerating colors",
            Stage::HueSorting => "sorting hues",
            Stage::LightnessSorting => "sorting lightnesses",
            Stage::Associating => "associating to Piet palette",
            Stage::Remapping => "remapping colors",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way to move the diff threshold after a color count mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdHint {
    /// Too many colors were found: similar colors were kept apart.
    Increase,
    /// Too few colors were found: distinct colors were merged.
    Decrease,
}

impl ThresholdHint {
    /// Hint for `found` colors when `expected` were needed.
    pub fn for_count(found: usize, expected: usize) -> Self {
        if found > expected {
            ThresholdHint::Increase
        } else {
            ThresholdHint::Decrease
        }
    }
}

impl fmt::Display for ThresholdHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdHint::Increase => f.write_str("increasing"),
            ThresholdHint::Decrease => f.write_str("decreasing"),
        }
    }
}

/// Receiver of pipeline events.
///
/// All methods default to doing nothing, so implementors only override
/// what they care about.
pub trait Reporter {
    /// A stage is about to run.
    fn stage_started(&mut self, _stage: Stage) {}

    /// Color discovery finished with the expected number of colors.
    fn colors_found(&mut self, _count: usize) {}

    /// Color discovery finished with the wrong number of colors.
    fn count_mismatch(&mut self, _found: usize, _expected: usize, _hint: ThresholdHint) {}

    /// One hue family has the wrong number of members. Called once per
    /// offending family, before the run aborts.
    fn hue_mismatch(&mut self, _mismatch: &HueMismatch) {}

    /// Full listing of every family, on hue sorting failure or after
    /// association in verbose mode.
    fn hue_dump(&mut self, _families: &[FamilyListing<'_>]) {}

    /// A stage completed successfully.
    fn done(&mut self, _stage: Stage) {}
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}
