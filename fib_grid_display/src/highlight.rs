// highlight.rs - Timed colour feedback for cells touched by a toggle

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::Color32;
use fib_grid::Position;

pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(1);
pub const IDLE_COLOR: Color32 = Color32::from_rgb(0x40, 0x55, 0x59);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Advanced,
    Reset,
}

impl Highlight {
    pub fn color(self) -> Color32 {
        match self {
            Highlight::Advanced => Color32::YELLOW,
            Highlight::Reset => Color32::GREEN,
        }
    }
}

/// Pending highlight per cell. Setting a cell again cancels its previous
/// highlight and restarts the timer.
pub struct Highlights {
    active: HashMap<Position, (Highlight, Instant)>,
    duration: Duration,
}

impl Default for Highlights {
    fn default() -> Self {
        Self::new(HIGHLIGHT_DURATION)
    }
}

impl Highlights {
    pub fn new(duration: Duration) -> Self {
        Self { active: HashMap::new(), duration }
    }

    pub fn set(&mut self, pos: Position, kind: Highlight, now: Instant) {
        self.active.insert(pos, (kind, now + self.duration));
    }

    /// Drop every highlight whose deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        self.active.retain(|_, (_, deadline)| *deadline > now);
    }

    pub fn color_at(&self, pos: Position) -> Color32 {
        self.active
            .get(&pos)
            .map_or(IDLE_COLOR, |(kind, _)| kind.color())
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.values().map(|(_, deadline)| *deadline).min()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}
