// src/playback/job.rs
use crate::core::types::GestureId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    NotStarted,
    At(usize),
    Complete,
}

/// An immutable gesture sequence and a cursor that only moves forward
/// (or back to `NotStarted` on reset).
#[derive(Debug, Clone)]
pub struct PlaybackJob {
    id: u64,
    gestures: Vec<GestureId>,
    cursor: Cursor,
}

impl PlaybackJob {
    pub fn new(id: u64, gestures: Vec<GestureId>) -> Self {
        Self { id, gestures, cursor: Cursor::NotStarted }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn gestures(&self) -> &[GestureId] {
        &self.gestures
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn start(&mut self) {
        self.cursor = if self.gestures.is_empty() { Cursor::Complete } else { Cursor::At(0) };
    }

    /// The gesture under the cursor and its index.
    pub fn current(&self) -> Option<(usize, &GestureId)> {
        match self.cursor {
            Cursor::At(i) => self.gestures.get(i).map(|g| (i, g)),
            _ => None,
        }
    }

    pub fn advance(&mut self) {
        if let Cursor::At(i) = self.cursor {
            self.cursor = if i + 1 >= self.gestures.len() { Cursor::Complete } else { Cursor::At(i + 1) };
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == Cursor::Complete
    }

    pub fn reset(&mut self) {
        self.cursor = Cursor::NotStarted;
    }
}
