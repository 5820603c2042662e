//! Deterministic level construction
//!
//! Everything that places entities into an act lives here:
//! - Seeded RNG only (or an injected `rand::Rng` in tests)
//! - Stable insertion order
//! - No rendering or platform dependencies

pub mod entity;
pub mod populate;
pub mod state;

pub use entity::{KnowledgeScroll, Platform};
pub use populate::{populate_act_one, required_quotes};
pub use state::{LevelState, RngState};
