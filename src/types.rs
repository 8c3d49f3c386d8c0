//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame timing (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity pacing: pieces fall every BASE_FALL_MS at level 1, and each
/// level shaves FALL_SPEEDUP_PER_LEVEL_MS off, never dropping below
/// MIN_FALL_MS.
pub const BASE_FALL_MS: u32 = 1000;
pub const FALL_SPEEDUP_PER_LEVEL_MS: u32 = 100;
pub const MIN_FALL_MS: u32 = 100;

/// Points per simultaneous line clear (index = lines), multiplied by level
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Level advances every this many total cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Percentage of spawns drawn from the standard seven shapes only;
/// the rest draw from the full catalog (standard shapes included)
pub const STANDARD_SPAWN_PERCENT: u32 = 70;

/// Horizontal kick offsets tried, in order, when an in-place rotation
/// collides
pub const KICK_OFFSETS: [i8; 4] = [1, -1, 2, -2];

/// Block colors, drawn independently of the shape on every spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Pink,
    Cyan,
    Yellow,
    Violet,
    Red,
    Green,
    Orange,
    Aqua,
    Orchid,
    Lime,
}

impl BlockColor {
    pub const ALL: [BlockColor; 10] = [
        BlockColor::Pink,
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Violet,
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Orange,
        BlockColor::Aqua,
        BlockColor::Orchid,
        BlockColor::Lime,
    ];
}

/// Cell on the board (None = empty, Some = filled block of that color)
pub type Cell = Option<BlockColor>;

/// Engine commands issued by the player (or any front end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Begin a fresh game from Idle/GameOver, resume from Paused
    Start,
    /// Toggle between Running and Paused
    Pause,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    /// Begin a fresh game from any state
    Reset,
}

/// Game lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start; no pieces exist yet
    Idle,
    Running,
    Paused,
    GameOver,
}
