use crate::game::{GameEngine, Piece};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// A player that drops into a uniformly random column that still has room.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic player for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a column, or `None` if the board is full.
    pub fn select_column(&mut self, engine: &GameEngine) -> Option<i32> {
        let columns = engine.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    /// Keep dropping for both sides until the game is over and return the
    /// outcome.
    pub fn play_out(&mut self, engine: &mut GameEngine) -> Piece {
        while let Some(column) = self.select_column(engine) {
            engine.drop_piece(column);
        }
        engine.game_state()
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Win/draw counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Piece) {
        match outcome {
            Piece::X => self.x_wins += 1,
            Piece::O => self.o_wins += 1,
            Piece::Blank => self.draws += 1,
            Piece::Invalid => log::warn!("ignoring unfinished game"),
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Play `games` random games from a fresh board each time.
pub fn simulate(player: &mut RandomPlayer, games: usize) -> Tally {
    let mut engine = GameEngine::new();
    let mut tally = Tally::default();
    for _ in 0..games {
        engine.reset();
        tally.record(player.play_out(&mut engine));
    }
    tally
}
