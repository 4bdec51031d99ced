/// Handle to a slime registered in a [`GridWorld`](crate::world::GridWorld).
///
/// The world owns every slime position; the handle is only an index into that
/// registry, assigned in creation order starting at 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlimeId(pub(crate) usize);

impl SlimeId {
    pub fn index(self) -> usize {
        self.0
    }
}
