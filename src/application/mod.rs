// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to carry out one
// command end to end (summarise, generate questions, quiz,
// progress, plan, tips).
//
// Rules for this layer:
//   - No text-analysis algorithms here (that's Layer 5)
//   - No printing or stdin handling (that's Layer 1)
//   - No direct file formats (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Shared configuration for every command
pub mod config;

// Loading and cleaning notes, shared by the text commands
pub mod notes;

// Plain and structured summaries
pub mod summarize_use_case;

// Question generation
pub mod mcq_use_case;

// Adaptive quiz sessions and progress recording
pub mod quiz_use_case;

// Dashboard, skill level, topic mastery and learning path
pub mod progress_use_case;

// Study plan scheduling and export
pub mod plan_use_case;

// Study tips, topic groups and resources
pub mod tips_use_case;
