// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that describe what the
// study assistant works with.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - NO text-processing algorithms (those live in `nlp`)
//
// Everything here derives Serialize/Deserialize so the CLI can
// emit results as JSON and the infra layer can persist them.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A loaded notes file and where it came from
pub mod document;

// Generated multiple-choice questions and their difficulty
pub mod question;

// The structured summary produced from a set of notes
pub mod summary;

// Study plans, resources and motivational feedback
pub mod study;

// Recorded quiz attempts
pub mod progress;

// Core abstractions (traits) that other layers implement
pub mod traits;
