/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64, // Host timestamp of the current frame
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }
}

/// Score of the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

/// Session highscores, best first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highscores {
    entries: Vec<u32>,
    capacity: usize,
}

impl Highscores {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a finished run. Returns true if the score made the list.
    pub fn record(&mut self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        // Ties go after the scores already listed
        let pos = self.entries.partition_point(|&e| e >= score);
        if pos >= self.capacity {
            return false;
        }
        self.entries.insert(pos, score);
        self.entries.truncate(self.capacity);
        true
    }

    /// Best score so far, 0 before any scoring run
    pub fn best(&self) -> u32 {
        self.entries.first().copied().unwrap_or(0)
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Debounce for paddle hits
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTimer {
    pub last_hit_ms: Option<f64>,
}

impl HitTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once more than `window_ms` has passed since the last hit
    pub fn ready(&self, now_ms: f64, window_ms: f64) -> bool {
        match self.last_hit_ms {
            Some(last) => now_ms - last > window_ms,
            None => true,
        }
    }

    pub fn record(&mut self, now_ms: f64) {
        self.last_hit_ms = Some(now_ms);
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub paddle_hit: bool,
    pub wall_hit: bool,
    pub run_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = false;
        self.wall_hit = false;
        self.run_ended = false;
    }
}
