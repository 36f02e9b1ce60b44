// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem outside of loading
// notes:
//
//   config_store.rs   — StudyConfig as JSON
//
//   progress_store.rs — Quiz history in <data-dir>/progress.json.
//                       Supplies the previous accuracy that
//                       drives adaptive difficulty.
//
//   metrics.rs        — Quiz attempts appended to
//                       <data-dir>/attempts.csv for charting.
//
//   export.rs         — Study plan CSV export and question
//                       set JSON files.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// StudyConfig loading and saving
pub mod config_store;

/// Persistent quiz history
pub mod progress_store;

/// Quiz attempt CSV logger
pub mod metrics;

/// Plan and question file export
pub mod export;
