// ============================================================
// Layer 5b — Study Helpers
// ============================================================
// Everything around the quiz that isn't text analysis:
//
//   planner.rs   — timed study schedule and its CSV rendering
//   feedback.rs  — motivational messages after a quiz
//   resources.rs — catalog of free learning resources
//   analytics.rs — dashboards, trends and the learning path
//                  built from recorded quizzes
//
// Like the NLP layer, nothing here touches the filesystem.
// Writing the CSV to disk is done by infra::export.

/// Study schedules
pub mod planner;

/// Post-quiz encouragement and streak messages
pub mod feedback;

/// Subject resource catalog and search
pub mod resources;

/// Reports over quiz history
pub mod analytics;
