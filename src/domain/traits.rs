// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams the rest of the system is written against:
//
//   DocumentSource → anything that can hand us study notes
//                    (a single file, a directory, a test fixture)
//
//   RandomSource   → the only source of non-determinism in the
//                    text pipeline. Question shuffling, answer
//                    placement and true/false coin flips all draw
//                    from it, so a seeded generator makes every
//                    generated quiz reproducible.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use rand::Rng;

use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load study notes.
///
/// Implementations:
///   - NotesLoader → a .txt/.md/.docx file or a directory of them
pub trait DocumentSource {
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── RandomSource ─────────────────────────────────────────────────────────────
/// Where the text pipeline draws its randomness from.
///
/// Every `rand::Rng` is a RandomSource, so callers pass
/// `rand::thread_rng()` in production and
/// `StdRng::seed_from_u64(..)` in tests. Shuffles go through
/// `SliceRandom`, picks through `gen_range` and `gen_bool`.
pub trait RandomSource: Rng {}

impl<R: Rng + ?Sized> RandomSource for R {}
