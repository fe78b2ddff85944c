// fixtures/mod.rs - Reusable mentor rosters
//
// Builders for the records tests keep needing: a single mentor from its
// display fields, a numbered roster of any size, and a small realistic
// roster that mirrors `data/mentors.json`.

pub mod mentors;

pub use mentors::*;
