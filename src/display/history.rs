//! Scroll-back history for time-domain displays
//!
//! A fixed number of frame columns written round-robin. The cursor names the
//! column that the next frame overwrites, which is also the oldest column
//! once the history is full.

/// Ring of the most recent `num_frames` frames
#[derive(Debug, Clone)]
pub struct FrameHistory<T> {
    frames: Vec<Option<T>>,
    current_frame: usize,
}

impl<T> FrameHistory<T> {
    /// Create an empty history with `num_frames` columns
    pub fn new(num_frames: usize) -> Self {
        Self {
            frames: (0..num_frames).map(|_| None).collect(),
            current_frame: 0,
        }
    }

    /// Number of columns
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Column the next frame is written to
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Number of columns holding a frame
    pub fn len(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }

    /// Whether no column holds a frame
    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(Option::is_none)
    }

    /// Advance the cursor by one column, wrapping around
    pub fn proceed_frame(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.current_frame = (self.current_frame + 1) % self.frames.len();
    }

    /// Write `frame` into the current column and advance
    ///
    /// A zero-column history drops the frame.
    pub fn push(&mut self, frame: T) {
        if let Some(slot) = self.frames.get_mut(self.current_frame) {
            *slot = Some(frame);
        }
        self.proceed_frame();
    }

    /// Frame stored in `column`, if any
    pub fn get(&self, column: usize) -> Option<&T> {
        self.frames.get(column).and_then(Option::as_ref)
    }

    /// Most recently pushed frame
    pub fn latest(&self) -> Option<&T> {
        let n = self.frames.len();
        if n == 0 {
            return None;
        }
        self.get((self.current_frame + n - 1) % n)
    }

    /// Stored frames from oldest to newest
    pub fn iter_chronological(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.frames.split_at(self.current_frame);
        older.iter().chain(newer).filter_map(Option::as_ref)
    }

    /// Resize to `num_frames` columns, discarding all frames and resetting
    /// the cursor
    pub fn change_num_frames(&mut self, num_frames: usize) {
        self.frames = (0..num_frames).map(|_| None).collect();
        self.current_frame = 0;
    }

    /// Discard all frames, keeping the column count
    pub fn clear(&mut self) {
        self.frames.iter_mut().for_each(|f| *f = None);
        self.current_frame = 0;
    }
}
