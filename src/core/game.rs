//! Game module - ties board, catalog, spawner and scoring together
//!
//! Owns the full cycle: spawn, fall, move/rotate, lock, clear, score,
//! respawn. Pure and deterministic: the front end drives it with commands
//! and elapsed-time ticks, then drains the buffered events.

use crate::core::board::Board;
use crate::core::events::{GameEvent, StatsSnapshot};
use crate::core::piece::Piece;
use crate::core::rng::PieceSpawner;
use crate::core::scoring;
use crate::types::{GameCommand, GamePhase, BASE_FALL_MS, KICK_OFFSETS};

/// The whole game: board, pieces in flight, stats, and pending events.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    spawner: PieceSpawner,
    phase: GamePhase,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create an idle game with the given RNG seed. Nothing spawns until
    /// the first Start command.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            spawner: PieceSpawner::new(seed),
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms: BASE_FALL_MS,
            fall_timer_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for tests, benches and tooling that stage board
    /// contents. The front end never uses this.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// The preview piece promoted at the next lock
    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Current score panel values
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score,
            lines: self.lines,
            level: self.level,
            is_paused: self.phase == GamePhase::Paused,
        }
    }

    /// Take all events buffered since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a player command. Commands that do not apply to the current
    /// phase are silently ignored.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Reset => self.start_fresh(),
            GameCommand::Pause => self.toggle_pause(),
            GameCommand::MoveLeft => self.player_move(-1, 0),
            GameCommand::MoveRight => self.player_move(1, 0),
            GameCommand::SoftDrop => self.player_move(0, 1),
            GameCommand::Rotate => self.rotate(),
            GameCommand::HardDrop => self.hard_drop(),
        }
    }

    /// Advance timers by elapsed milliseconds. When the accumulated time
    /// reaches the fall interval it resets and one gravity step applies
    /// (which may lock the piece). Only Running games tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            self.try_move(0, 1);
        }
    }

    /// Start begins a fresh game from Idle or GameOver and resumes from
    /// Paused. While Running it is a no-op so a stray press cannot wipe
    /// the board.
    fn start(&mut self) {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => self.start_fresh(),
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.emit_state();
            }
            GamePhase::Running => {}
        }
    }

    /// Reset everything and enter Running with two freshly drawn pieces
    fn start_fresh(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.fall_interval_ms = BASE_FALL_MS;
        self.fall_timer_ms = 0;
        self.current = Some(self.spawner.next_piece());
        self.next = Some(self.spawner.next_piece());
        self.phase = GamePhase::Running;
        self.emit_state();
    }

    fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.emit_state();
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.emit_state();
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    fn player_move(&mut self, dx: i8, dy: i8) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.try_move(dx, dy);
    }

    /// Try to translate the current piece. A blocked downward step means
    /// the piece has landed and runs the lock sequence; a blocked
    /// horizontal step is a silent no-op.
    fn try_move(&mut self, dx: i8, dy: i8) {
        let Some(piece) = self.current else {
            return;
        };

        if !self.board.collides(&piece.shape, piece.x + dx, piece.y + dy) {
            self.current = Some(Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            if dx != 0 && dy == 0 {
                self.events.push(GameEvent::Moved);
            }
        } else if dy > 0 {
            self.lock_current();
        }
    }

    /// Rotate clockwise, trying the anchor in place first and then the
    /// fixed kick offsets in order. The first fit wins; if none fits the
    /// piece is unchanged.
    fn rotate(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        let rotated = piece.shape.rotated_cw();

        if !self.board.collides(&rotated, piece.x, piece.y) {
            self.current = Some(Piece {
                shape: rotated,
                ..piece
            });
            self.events.push(GameEvent::Rotated);
            return;
        }

        for kick in KICK_OFFSETS {
            if !self.board.collides(&rotated, piece.x + kick, piece.y) {
                self.current = Some(Piece {
                    shape: rotated,
                    x: piece.x + kick,
                    ..piece
                });
                self.events.push(GameEvent::Rotated);
                return;
            }
        }
    }

    /// Drop the current piece as far as it can fall and lock it there.
    /// A drop that cannot move the piece at all is a no-op, not a lock.
    fn hard_drop(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        let mut distance: i8 = 0;
        while !self
            .board
            .collides(&piece.shape, piece.x, piece.y + distance + 1)
        {
            distance += 1;
        }

        if distance > 0 {
            self.current = Some(Piece {
                y: piece.y + distance,
                ..piece
            });
            self.lock_current();
        }
    }

    /// Lock sequence: commit the piece, clear and score full rows, promote
    /// the preview piece and draw a fresh one. Ends the game when the
    /// promoted piece is blocked at its spawn placement. Runs as one step;
    /// callers observe the buffered events only afterwards.
    fn lock_current(&mut self) {
        let Some(piece) = self.current else {
            return;
        };

        self.board
            .commit(&piece.shape, piece.x, piece.y, piece.color);
        self.events.push(GameEvent::Locked);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // Points use the level in effect before this clear raises it.
            self.score = self
                .score
                .saturating_add(scoring::line_clear_points(cleared, self.level));
            self.lines += cleared;

            let new_level = scoring::level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.fall_interval_ms = scoring::fall_interval_ms(new_level);
                self.events.push(GameEvent::LeveledUp(new_level));
            }

            self.events.push(GameEvent::LinesCleared(cleared));
            self.emit_state();
        }

        let promoted = self
            .next
            .take()
            .unwrap_or_else(|| self.spawner.next_piece());
        self.next = Some(self.spawner.next_piece());

        // The blocking piece stays visible as the current piece.
        let blocked = self
            .board
            .collides(&promoted.shape, promoted.x, promoted.y);
        self.current = Some(promoted);

        if blocked {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
        }
    }

    fn emit_state(&mut self) {
        self.events.push(GameEvent::StateChanged(self.stats()));
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
