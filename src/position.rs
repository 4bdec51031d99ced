use std::fmt;

/// A cell coordinate on the grid. Equality and hashing are by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline(always)]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps by `(dx, dy)` and wraps each axis independently onto a `width` x `height` torus.
    #[inline(always)]
    pub fn wrapped_offset(self, dx: isize, dy: isize, width: usize, height: usize) -> Self {
        Self::new(wrap_axis(self.x, dx, width), wrap_axis(self.y, dy, height))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Offsets are limited to one step, so adding `len` once keeps the sum non-negative.
#[inline(always)]
fn wrap_axis(coord: usize, delta: isize, len: usize) -> usize {
    let shifted = coord as isize + delta + len as isize;
    (shifted as usize) % len
}
