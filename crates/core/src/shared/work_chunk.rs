use std::ops::Range;

/// A contiguous column range owned by one worker.
///
/// The worker writes only `[left_offset, right_offset)`. The padding widens
/// that range on the read side: `-1`/`+1` when a neighbouring chunk's column
/// is needed for the stencil, `0` at the image border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkChunk {
    pub left_offset: usize,
    pub right_offset: usize,
    pub left_padding: i8,
    pub right_padding: i8,
}

impl WorkChunk {
    pub fn output_range(&self) -> Range<usize> {
        self.left_offset..self.right_offset
    }

    /// Input columns the worker may read: the output range plus its halo.
    pub fn read_range(&self) -> Range<usize> {
        let start = self
            .left_offset
            .saturating_sub(usize::from(self.left_padding < 0));
        let end = self.right_offset + usize::from(self.right_padding > 0);
        start..end
    }

    pub fn len(&self) -> usize {
        self.right_offset - self.left_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
