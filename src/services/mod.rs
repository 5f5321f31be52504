pub mod remap_service;
pub mod reporting;

pub use remap_service::{palette_rows, PaletteRow, RemapOutcome, RemapService};
pub use reporting::{ConsoleReporter, JsonReport, JsonReporter, ReportEvent};
