//! Reporter implementations for the command line: human-readable console
//! progress and a collected JSON report.

use piet_palette::{FamilyListing, HueMismatch, Reporter, Stage, ThresholdHint};
use serde::Serialize;
use std::io::{IsTerminal, Write};

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Prints `[*]`, `[+]` and `[-]` progress lines.
///
/// Markers are colored only when writing to a terminal.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        let out = std::io::stdout();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn good(&self) -> String {
        self.marker(GREEN, "[+]")
    }

    fn bad(&self) -> String {
        self.marker(RED, "[-]")
    }

    fn marker(&self, ansi: &str, marker: &str) -> String {
        if self.color {
            format!("{ansi}{marker}{RESET}")
        } else {
            marker.to_string()
        }
    }

    /// Write one line. A broken stdout is not worth aborting a run over.
    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "Failed to write progress line");
        }
    }

    /// Final status line once the output image is written
    pub fn saved(&mut self, path: &std::path::Path) {
        let good = self.good();
        self.line(&format!("{good} saved remapped image to {}", path.display()));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn stage_started(&mut self, stage: Stage) {
        tracing::debug!(stage = %stage, "Stage started");
        self.line(&format!("[*] {}...", capitalize(stage.name())));
    }

    fn colors_found(&mut self, count: usize) {
        tracing::debug!(count, "Colors found");
        let good = self.good();
        self.line(&format!("{good} found {count} colors"));
    }

    fn count_mismatch(&mut self, found: usize, expected: usize, hint: ThresholdHint) {
        tracing::debug!(found, expected, hint = %hint, "Color count mismatch");
        let bad = self.bad();
        self.line(&format!(
            "{bad} Error: found {found} colors, expected {expected}; try {hint} the diff threshold"
        ));
    }

    fn hue_mismatch(&mut self, mismatch: &HueMismatch) {
        tracing::debug!(
            hue = %mismatch.hue,
            found = mismatch.found,
            expected = mismatch.expected,
            "Hue bucket mismatch"
        );
        let bad = self.bad();
        self.line(&format!(
            "{bad} Error: bad hue sorting for {}, found {} colors, expected {}; try acting on the level threshold",
            mismatch.hue, mismatch.found, mismatch.expected
        ));
    }

    fn hue_dump(&mut self, families: &[FamilyListing<'_>]) {
        for family in families {
            self.line(&format!("{}\t({:04b}):", family.hue, family.hue.bits()));
            for cluster in &family.clusters {
                let reference = cluster
                    .reference()
                    .map_or_else(|| "-".to_string(), |r| r.to_string());
                self.line(&format!(
                    "\t\t{} -> {}\t(weight {}, level {})",
                    cluster.average(),
                    reference,
                    cluster.weight(),
                    cluster.level()
                ));
            }
        }
    }

    fn done(&mut self, stage: Stage) {
        tracing::debug!(stage = %stage, "Stage done");
        let good = self.good();
        match stage {
            // colors_found already closed this stage
            Stage::Enumerating => {}
            Stage::HueSorting => self.line(&format!("{good} coherent hue sorting")),
            _ => self.line(&format!("{good} done")),
        }
    }
}

/// One cluster in a JSON hue dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterEntry {
    pub average: String,
    pub weight: u64,
    pub level: u32,
    pub reference: Option<String>,
}

/// One family in a JSON hue dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyEntry {
    pub hue: String,
    pub clusters: Vec<ClusterEntry>,
}

impl From<&FamilyListing<'_>> for FamilyEntry {
    fn from(family: &FamilyListing<'_>) -> Self {
        Self {
            hue: family.hue.name().to_string(),
            clusters: family
                .clusters
                .iter()
                .map(|c| ClusterEntry {
                    average: c.average().to_string(),
                    weight: c.weight(),
                    level: c.level(),
                    reference: c.reference().map(|r| r.to_string()),
                })
                .collect(),
        }
    }
}

/// A pipeline event as recorded by [`JsonReporter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    StageStarted {
        stage: String,
    },
    ColorsFound {
        count: usize,
    },
    CountMismatch {
        found: usize,
        expected: usize,
        hint: String,
    },
    HueMismatch {
        hue: String,
        found: usize,
        expected: usize,
    },
    HueDump {
        families: Vec<FamilyEntry>,
    },
    Done {
        stage: String,
    },
}

/// Document printed by `--json`
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub success: bool,
    pub exit_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub events: Vec<ReportEvent>,
}

/// Collects every event for a single JSON document.
#[derive(Debug, Default)]
pub struct JsonReporter {
    events: Vec<ReportEvent>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn into_report(
        self,
        exit_code: u8,
        output: Option<String>,
        error: Option<String>,
    ) -> JsonReport {
        JsonReport {
            success: error.is_none(),
            exit_code,
            output,
            error,
            events: self.events,
        }
    }
}

impl Reporter for JsonReporter {
    fn stage_started(&mut self, stage: Stage) {
        tracing::debug!(stage = %stage, "Stage started");
        self.events.push(ReportEvent::StageStarted {
            stage: stage.name().to_string(),
        });
    }

    fn colors_found(&mut self, count: usize) {
        self.events.push(ReportEvent::ColorsFound { count });
    }

    fn count_mismatch(&mut self, found: usize, expected: usize, hint: ThresholdHint) {
        self.events.push(ReportEvent::CountMismatch {
            found,
            expected,
            hint: hint.to_string(),
        });
    }

    fn hue_mismatch(&mut self, mismatch: &HueMismatch) {
        self.events.push(ReportEvent::HueMismatch {
            hue: mismatch.hue.name().to_string(),
            found: mismatch.found,
            expected: mismatch.expected,
        });
    }

    fn hue_dump(&mut self, families: &[FamilyListing<'_>]) {
        self.events.push(ReportEvent::HueDump {
            families: families.iter().map(FamilyEntry::from).collect(),
        });
    }

    fn done(&mut self, stage: Stage) {
        tracing::debug!(stage = %stage, "Stage done");
        self.events.push(ReportEvent::Done {
            stage: stage.name().to_string(),
        });
    }
}
