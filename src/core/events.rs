//! Engine events and the stats snapshot handed to observers
//!
//! Events are buffered inside the engine while a command or tick runs and
//! drained by the caller afterwards, so multi-step sequences (lock, clear,
//! level up) are observed in order and never half-applied.

/// Score panel snapshot carried by [`GameEvent::StateChanged`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub is_paused: bool,
}

/// Observable engine events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The current piece moved horizontally
    Moved,
    /// The current piece rotated (kicked or in place)
    Rotated,
    /// A piece committed to the board
    Locked,
    /// Full rows removed by the last lock
    LinesCleared(u32),
    /// Level increased to the carried value
    LeveledUp(u32),
    /// Spawn blocked; emitted exactly once per game
    GameOver,
    /// Score, lines, level or the pause flag changed
    StateChanged(StatsSnapshot),
}
