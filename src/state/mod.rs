//! Shared client-side state models.
//!
//! DESIGN
//! ======
//! State is split by owner: `library` belongs to the studio page (the
//! collection orchestrator), `player` to the playback panel, and `diag`
//! records swallowed background failures. Each model is a plain struct
//! with pure transition functions so the interesting logic tests natively,
//! without a browser; components wrap them in `RwSignal`s.

pub mod diag;
pub mod library;
pub mod player;
