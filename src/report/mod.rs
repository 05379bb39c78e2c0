/*!
 * Reporting of analysis results.
 *
 * - `console`: human-readable report
 * - `export`: CSV and JSON exports, visualization handoff
 */

pub mod console;
pub mod export;

// Re-export main types
pub use console::ConsoleReport;
pub use export::{hand_off_frequencies, FrequencyConsumer, FrequencyKind, JsonFrequencyExporter, ReportExporter};
