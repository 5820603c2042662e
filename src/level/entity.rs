//! Entities placed during level setup

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH};

/// A static rectangular platform (position is the top-left corner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Assigned by `LevelState`; 0 until then
    #[serde(default)]
    pub id: u32,
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Platform {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: 0,
            pos: IVec2::new(x, y),
            width,
            height,
        }
    }

    /// Platform with the default 250x20 footprint
    pub fn standard(x: i32, y: i32) -> Self {
        Self::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT)
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }
}

/// A collectible scroll carrying one Hamlet quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeScroll {
    #[serde(default)]
    pub id: u32,
    pub pos: IVec2,
    pub text: String,
}

impl KnowledgeScroll {
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            pos: IVec2::new(x, y),
            text: text.into(),
        }
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }
}
