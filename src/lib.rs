//! Hamlet's Descent - level setup for a 2D Shakespeare platformer
//!
//! Core modules:
//! - `level`: Deterministic level construction (platforms, knowledge scrolls)
//! - `quotes`: Hamlet quotations carried by scrolls and shown in the HUD
//! - `settings`: Screen dimensions and run seed
//! - `error`: Crate error type

pub mod error;
pub mod level;
pub mod quotes;
pub mod settings;

pub use error::{LevelError, Result};
pub use quotes::{HAMLET_QUOTES, Quote, QuoteCycle};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 1600;
    pub const SCREEN_HEIGHT: i32 = 1200;

    /// Platform defaults
    pub const PLATFORM_WIDTH: i32 = 250;
    pub const PLATFORM_HEIGHT: i32 = 20;

    /// Act 1 platform row: first x and spacing
    pub const ACT1_PLATFORM_COUNT: i32 = 3;
    pub const ACT1_PLATFORM_START_X: i32 = 500;
    pub const ACT1_PLATFORM_SPACING: i32 = 800;
    /// Platforms sit this far above the bottom of the screen...
    pub const ACT1_PLATFORM_BASE_OFFSET: i32 = 200;
    /// ...raised by a random amount in [0, ACT1_PLATFORM_JITTER]
    pub const ACT1_PLATFORM_JITTER: i32 = 150;

    /// Act 1 scroll row
    pub const ACT1_SCROLL_COUNT: i32 = 2;
    pub const ACT1_SCROLL_START_X: i32 = 800;
    pub const ACT1_SCROLL_SPACING: i32 = 1200;
    pub const ACT1_SCROLL_OFFSET: i32 = 350;
    /// Act 1 scrolls read quotations starting at this index
    pub const ACT1_QUOTE_OFFSET: usize = 7;

    /// Seconds each HUD quote stays on screen
    pub const QUOTE_DISPLAY_SECS: f32 = 8.0;
}
