//! Level state: the placed entities plus everything needed to rebuild them
//!
//! A level is fully determined by its seed, screen height and quotation list.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{KnowledgeScroll, Platform};
use super::populate::populate_act_one;
use crate::error::Result;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// A populated act (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Act number (1-based, as shown to the player)
    pub act: u32,
    pub screen_height: i32,
    /// Platforms in insertion order
    pub platforms: Vec<Platform>,
    /// Knowledge scrolls in insertion order
    pub scrolls: Vec<KnowledgeScroll>,
    /// Next entity ID
    next_id: u32,
}

impl LevelState {
    fn empty(seed: u64, act: u32, screen_height: i32) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            act,
            screen_height,
            platforms: Vec::new(),
            scrolls: Vec::new(),
            next_id: 1,
        }
    }

    /// Build Act 1 from a seed
    pub fn act_one<Q: AsRef<str>>(seed: u64, screen_height: i32, quotes: &[Q]) -> Result<Self> {
        let mut state = Self::empty(seed, 1, screen_height);
        let mut rng = state.rng_state.to_rng();

        populate_act_one(
            screen_height,
            &mut state.platforms,
            &mut state.scrolls,
            quotes,
            &mut rng,
        )?;
        state.assign_ids();

        log::info!(
            "Act {} built: seed={}, platforms={}, scrolls={}",
            state.act,
            seed,
            state.platforms.len(),
            state.scrolls.len()
        );
        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Give every not-yet-numbered entity a unique ID, platforms first
    fn assign_ids(&mut self) {
        for i in 0..self.platforms.len() {
            if self.platforms[i].id == 0 {
                self.platforms[i].id = self.next_entity_id();
            }
        }
        for i in 0..self.scrolls.len() {
            if self.scrolls[i].id == 0 {
                self.scrolls[i].id = self.next_entity_id();
            }
        }
    }
}
