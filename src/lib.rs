// ============================================================
// study-pal — library root
// ============================================================
// Layered the same way the binary is read top to bottom:
//
//   Layer 1  cli          argument parsing, terminal output
//   Layer 2  application  one use case per command
//   Layer 3  domain       plain data types and traits
//   Layer 4  data         loading and cleaning notes
//   Layer 5  nlp          text analysis and question generation
//   Layer 5b study        planning, feedback and resources
//   Layer 6  infra        JSON/CSV persistence

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod nlp;
pub mod study;
