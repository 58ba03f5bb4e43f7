//! Scheduler state carried between TTIs.
//!
//! The only state that outlives a pass is the cursor. Callers either keep a
//! [`Cursor`] themselves or let [`SchedulerState`] hold one per cell.

use std::collections::HashMap;
use std::fmt;

use crate::types::CellId;

/// Roster position at which the next pass begins.
///
/// Any integer is accepted; it is reduced modulo the roster size right before
/// use so a cursor left over from a larger roster never indexes out of bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor(i64);

impl Cursor {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Position in `[0, n)`, or `0` for an empty roster.
    pub fn normalize(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // Roster lengths always fit in i64 (slices are capped at isize::MAX).
        self.0.rem_euclid(n as i64) as usize
    }

    /// Same cursor reduced to `[0, n)`.
    pub fn normalized(&self, n: usize) -> Self {
        Self::from(self.normalize(n))
    }
}

impl From<usize> for Cursor {
    fn from(pos: usize) -> Self {
        Self(pos as i64)
    }
}

impl From<i64> for Cursor {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-cell scheduler state.
#[derive(Debug, Default, Clone)]
pub struct CellSchedulerState {
    /// Where the next pass for this cell starts.
    pub cursor: Cursor,

    /// Number of passes run for this cell.
    pub passes: u64,
}

/// Scheduler state keyed by cell. Cells never share a cursor.
#[derive(Debug, Default)]
pub struct SchedulerState {
    inner: HashMap<CellId, CellSchedulerState>,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// State for `cell`, created with a zero cursor on first use.
    pub fn cell_mut(&mut self, cell: CellId) -> &mut CellSchedulerState {
        self.inner.entry(cell).or_default()
    }

    pub fn cell(&self, cell: CellId) -> Option<&CellSchedulerState> {
        self.inner.get(&cell)
    }

    /// Forget a cell; its next pass starts from position 0.
    pub fn remove(&mut self, cell: CellId) -> Option<CellSchedulerState> {
        self.inner.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
