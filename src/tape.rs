//! The memory tape: an unbounded sequence of byte cells with a single cursor.
//!
//! The tape grows lazily in fixed-size chunks of [`CHUNK_LEN`] cells in either
//! direction, so a program is never limited to a fixed cell count and never
//! errors for walking off either end. Cells are zero on first visit. The tape
//! never shrinks during a run; every chunk is freed when the tape is dropped.

use std::collections::VecDeque;

/// Number of cells in one tape chunk.
pub const CHUNK_LEN: usize = 1024;

/// A tape chunk could not be allocated.
#[derive(Debug, thiserror::Error)]
#[error("failed to allocate a tape chunk ({CHUNK_LEN} cells)")]
pub struct AllocError;

/// An unbounded byte tape with a movable cursor.
///
/// Chunks live in a deque so the tape extends in both directions with
/// amortized O(1) single-cell steps. The cursor is a (chunk, cell) pair and
/// always addresses an allocated cell.
pub struct Tape {
    chunks: VecDeque<Box<[u8]>>,
    chunk: usize,
    cell: usize,
}

impl Tape {
    /// Create a tape with one zeroed chunk, cursor on its first cell.
    pub fn new() -> Self {
        let mut chunks = VecDeque::with_capacity(1);
        chunks.push_back(vec![0u8; CHUNK_LEN].into_boxed_slice());
        Self {
            chunks,
            chunk: 0,
            cell: 0,
        }
    }

    /// Move the cursor one cell to the left, allocating a chunk if the cursor
    /// steps off the leftmost allocated edge.
    pub fn shift_left(&mut self) -> Result<(), AllocError> {
        if self.cell > 0 {
            self.cell -= 1;
            return Ok(());
        }
        if self.chunk == 0 {
            // First visit past the left edge; the new chunk becomes index 0
            // and the cursor stays on it.
            self.chunks.try_reserve(1).map_err(|_| AllocError)?;
            self.chunks.push_front(alloc_chunk()?);
        } else {
            self.chunk -= 1;
        }
        self.cell = CHUNK_LEN - 1;
        Ok(())
    }

    /// Move the cursor one cell to the right, allocating a chunk if the cursor
    /// steps off the rightmost allocated edge.
    pub fn shift_right(&mut self) -> Result<(), AllocError> {
        if self.cell + 1 < CHUNK_LEN {
            self.cell += 1;
            return Ok(());
        }
        if self.chunk + 1 == self.chunks.len() {
            self.chunks.try_reserve(1).map_err(|_| AllocError)?;
            self.chunks.push_back(alloc_chunk()?);
        }
        self.chunk += 1;
        self.cell = 0;
        Ok(())
    }

    /// Add 1 to the cell under the cursor, wrapping 255 back to 0.
    pub fn increment(&mut self) {
        let cell = &mut self.chunks[self.chunk][self.cell];
        *cell = cell.wrapping_add(1);
    }

    /// Subtract 1 from the cell under the cursor, wrapping 0 back to 255.
    pub fn decrement(&mut self) {
        let cell = &mut self.chunks[self.chunk][self.cell];
        *cell = cell.wrapping_sub(1);
    }

    /// The byte under the cursor.
    pub fn read_cell(&self) -> u8 {
        self.chunks[self.chunk][self.cell]
    }

    /// Overwrite the byte under the cursor.
    pub fn write_cell(&mut self, value: u8) {
        self.chunks[self.chunk][self.cell] = value;
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocate one zero-filled chunk, reporting failure instead of aborting.
fn alloc_chunk() -> Result<Box<[u8]>, AllocError> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(CHUNK_LEN).map_err(|_| AllocError)?;
    cells.resize(CHUNK_LEN, 0);
    Ok(cells.into_boxed_slice())
}
