use crate::shared::error::FilterError;
use crate::shared::work_chunk::WorkChunk;

/// Splits an image's columns into one contiguous chunk per worker.
///
/// Every chunk gets `width / N` columns and the last one also takes the
/// `width % N` remainder. Chunks touching the left or right border have no
/// halo on that side; every other side reads one column from its neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkDecomposer {
    worker_count: usize,
}

impl WorkDecomposer {
    pub fn new(worker_count: usize) -> Result<Self, FilterError> {
        if worker_count == 0 {
            return Err(FilterError::InvalidWorkerCount(worker_count));
        }
        Ok(Self { worker_count })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn decompose(&self, width: usize) -> Vec<WorkChunk> {
        let n = self.worker_count;
        let base = width / n;
        let remainder = width % n;
        (0..n)
            .map(|c| {
                let left_offset = c * base;
                let last = c + 1 == n;
                let right_offset = left_offset + base + if last { remainder } else { 0 };
                WorkChunk {
                    left_offset,
                    right_offset,
                    left_padding: if c == 0 { 0 } else { -1 },
                    right_padding: if last { 0 } else { 1 },
                }
            })
            .collect()
    }
}
