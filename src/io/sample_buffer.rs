//! Sample ring buffering utilities

/// Ring buffer holding the most recent `capacity` samples
///
/// Older samples are overwritten as new ones arrive; reads always return
/// samples in chronological order.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Buffer data
    data: Vec<f32>,
    /// Next write position
    position: usize,
    /// Number of samples written so far, saturating at capacity
    filled: usize,
}

impl SampleBuffer {
    /// Create a new sample buffer, initially holding silence
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            position: 0,
            filled: 0,
        }
    }

    /// Maximum number of samples retained
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of real samples held (at most the capacity)
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Whether no samples have been pushed since creation or the last clear
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Add samples to buffer, dropping the oldest when full
    pub fn push(&mut self, samples: &[f32]) {
        let capacity = self.capacity();
        if capacity == 0 {
            return;
        }

        // Only the tail can survive
        let samples = &samples[samples.len().saturating_sub(capacity)..];
        for &sample in samples {
            self.data[self.position] = sample;
            self.position = (self.position + 1) % capacity;
        }
        self.filled = (self.filled + samples.len()).min(capacity);
    }

    /// Copy the most recent samples into `out`, oldest first
    ///
    /// When `out` is longer than the capacity the leading part is zero-filled.
    pub fn copy_latest(&self, out: &mut [f32]) {
        let capacity = self.capacity();
        let n = out.len().min(capacity);
        let (padding, tail) = out.split_at_mut(out.len() - n);
        padding.fill(0.0);

        if n == 0 {
            return;
        }
        let start = (self.position + capacity - n) % capacity;
        for (i, slot) in tail.iter_mut().enumerate() {
            *slot = self.data[(start + i) % capacity];
        }
    }

    /// Discard all samples and change the capacity
    pub fn resize(&mut self, capacity: usize) {
        self.data = vec![0.0; capacity];
        self.position = 0;
        self.filled = 0;
    }

    /// Discard all samples, keeping the capacity
    pub fn clear(&mut self) {
        self.data.fill(0.0);
        self.position = 0;
        self.filled = 0;
    }
}
