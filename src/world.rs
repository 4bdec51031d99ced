use crate::error::WorldError;
use crate::patch::Patch;
use crate::position::Position;
use crate::slime::SlimeId;
use log::{debug, warn};
use rand::prelude::*;
use std::collections::HashSet;

/// Moore offsets in enumeration order: x offset outer, y offset inner.
/// Aggregation's max-neighbour tie-break depends on this order.
const NEIGHBOR_OFFSETS: [isize; 3] = [-1, 0, 1];

/// A toroidal grid of patches plus the registry of slime positions.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    width: usize,
    height: usize,
    /// Dense, x-major: the patch at `(x, y)` lives at `x * height + y`.
    patches: Vec<Patch>,
    /// Indexed by `SlimeId`, in creation order.
    slime_positions: Vec<Position>,
}

impl GridWorld {
    /// Creates a `width` x `height` world with every patch at pheromone 0.0 and
    /// `num_slimes` slimes on distinct, uniformly drawn positions.
    ///
    /// Passing `None` as the seed draws a random positive one.
    pub fn create(
        width: usize,
        height: usize,
        num_slimes: usize,
        seed: Option<u64>,
    ) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidConfiguration("width and height must be positive".into()));
        }
        if num_slimes == 0 {
            return Err(WorldError::InvalidConfiguration("number of slimes must be positive".into()));
        }
        let seed = match seed {
            Some(0) => return Err(WorldError::InvalidConfiguration("seed must be positive".into())),
            Some(seed) => seed,
            None => rand::rng().random_range(1..=u64::MAX),
        };
        let capacity = width.checked_mul(height).ok_or_else(|| {
            WorldError::InvalidConfiguration(format!("a {width}x{height} grid does not fit in memory"))
        })?;
        if num_slimes > capacity {
            return Err(WorldError::InvalidConfiguration(format!(
                "number of slimes ({num_slimes}) exceeds the number of patches ({capacity})"
            )));
        }
        if width <= 2 || height <= 2 {
            warn!("A {}x{} grid has overlapping neighbourhoods; neighbours will repeat.", width, height);
        }

        let mut patches = Vec::with_capacity(capacity);
        for x in 0..width {
            for y in 0..height {
                patches.push(Patch::new(Position::new(x, y), 0.0)?);
            }
        }

        // Retry until every slime lands on a free patch.
        let mut rng = StdRng::seed_from_u64(seed);
        let mut occupied = HashSet::with_capacity(num_slimes);
        let mut slime_positions = Vec::with_capacity(num_slimes);
        while slime_positions.len() < num_slimes {
            let position = Position::new(rng.random_range(0..width), rng.random_range(0..height));
            if occupied.insert(position) {
                slime_positions.push(position);
            }
        }

        debug!(
            "Created {}x{} world with {} slimes (seed {}).",
            width, height, num_slimes, seed
        );
        Ok(Self { width, height, patches, slime_positions })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Every patch, x-major (`x` outer, `y` inner).
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Slime handles in creation order.
    pub fn slimes(&self) -> impl ExactSizeIterator<Item = SlimeId> {
        (0..self.slime_positions.len()).map(SlimeId)
    }

    pub fn slime_count(&self) -> usize {
        self.slime_positions.len()
    }

    /// # Panics
    /// If `slime` was not issued by this world.
    pub fn slime_position(&self, slime: SlimeId) -> Position {
        self.slime_positions[slime.0]
    }

    /// Overwrites the slime's recorded position. Occupancy is not checked, so
    /// several slimes may share a patch.
    ///
    /// # Panics
    /// If `slime` was not issued by this world.
    pub fn move_slime(&mut self, slime: SlimeId, position: Position) {
        self.slime_positions[slime.0] = position;
    }

    /// # Panics
    /// If `position` lies outside the grid.
    pub fn patch(&self, position: Position) -> &Patch {
        &self.patches[self.index_of(position)]
    }

    /// # Panics
    /// If `position` lies outside the grid.
    pub fn patch_mut(&mut self, position: Position) -> &mut Patch {
        let idx = self.index_of(position);
        &mut self.patches[idx]
    }

    /// The Moore neighbourhood of `patch` on the torus.
    ///
    /// On grids with a side of 2 or less the wrapped offsets coincide, so the
    /// result holds repeated patches, and entries landing back on `patch` are dropped.
    pub fn neighborhood(&self, patch: &Patch) -> Vec<&Patch> {
        self.neighbor_positions(patch.position())
            .into_iter()
            .map(|position| self.patch(position))
            .collect()
    }

    /// Positions of the Moore neighbourhood, in the same order as [`GridWorld::neighborhood`].
    pub fn neighbor_positions(&self, center: Position) -> Vec<Position> {
        let mut positions = Vec::with_capacity(8);
        for dx in NEIGHBOR_OFFSETS {
            for dy in NEIGHBOR_OFFSETS {
                let neighbor = center.wrapped_offset(dx, dy, self.width, self.height);
                if neighbor != center {
                    positions.push(neighbor);
                }
            }
        }
        positions
    }

    #[inline(always)]
    fn index_of(&self, position: Position) -> usize {
        assert!(
            position.x < self.width && position.y < self.height,
            "position {} outside {}x{} world",
            position,
            self.width,
            self.height
        );
        position.x * self.height + position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(width: usize, height: usize) -> GridWorld {
        GridWorld::create(width, height, 1, Some(7)).unwrap()
    }

    #[test]
    fn create_rejects_invalid_configuration() {
        let invalid = |r: Result<GridWorld, WorldError>| matches!(r, Err(WorldError::InvalidConfiguration(_)));
        assert!(invalid(GridWorld::create(0, 5, 1, Some(1))));
        assert!(invalid(GridWorld::create(5, 0, 1, Some(1))));
        assert!(invalid(GridWorld::create(5, 5, 0, Some(1))));
        assert!(invalid(GridWorld::create(5, 5, 1, Some(0))));
        assert!(invalid(GridWorld::create(2, 3, 7, Some(1))));
        assert!(invalid(GridWorld::create(usize::MAX, 2, 1, Some(1))));
    }

    #[test]
    fn create_fills_grid_and_places_distinct_slimes() {
        let world = GridWorld::create(4, 5, 20, Some(3)).unwrap();
        assert_eq!(world.patches().len(), 20);
        assert!(world.patches().iter().all(|p| p.pheromone() == 0.0));
        let positions: HashSet<Position> = world.slimes().map(|s| world.slime_position(s)).collect();
        assert_eq!(positions.len(), 20);
        for (i, patch) in world.patches().iter().enumerate() {
            assert_eq!(world.patch(patch.position()).position(), patch.position());
            assert_eq!(i, patch.position().x * 5 + patch.position().y);
        }
    }

    #[test]
    fn create_is_reproducible_for_a_seed() {
        let a = GridWorld::create(30, 30, 40, Some(99)).unwrap();
        let b = GridWorld::create(30, 30, 40, Some(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn create_without_seed_still_places_all_slimes() {
        let world = GridWorld::create(10, 10, 100, None).unwrap();
        assert_eq!(world.slime_count(), 100);
    }

    #[test]
    fn neighborhood_has_eight_distinct_wrapped_patches() {
        let world = world(5, 4);
        for patch in world.patches() {
            let neighbors = world.neighborhood(patch);
            assert_eq!(neighbors.len(), 8);
            let distinct: HashSet<Position> = neighbors.iter().map(|p| p.position()).collect();
            assert_eq!(distinct.len(), 8);
            assert!(!distinct.contains(&patch.position()));
        }
        let origin = world.patch(Position::new(0, 0));
        let neighbors: Vec<Position> = world.neighborhood(origin).iter().map(|p| p.position()).collect();
        assert!(neighbors.contains(&Position::new(4, 3)));
    }

    #[test]
    fn neighborhood_order_is_x_outer_y_inner() {
        let world = world(5, 5);
        let order = world.neighbor_positions(Position::new(2, 2));
        let expected = [
            (1, 1), (1, 2), (1, 3),
            (2, 1), (2, 3),
            (3, 1), (3, 2), (3, 3),
        ]
        .map(|(x, y)| Position::new(x, y));
        assert_eq!(order, expected);
    }

    #[test]
    fn small_grids_repeat_neighbours() {
        let two = world(2, 2);
        let around_origin = two.neighbor_positions(Position::new(0, 0));
        assert_eq!(around_origin.len(), 8);
        assert_eq!(around_origin.iter().filter(|p| **p == Position::new(1, 1)).count(), 4);
        assert_eq!(around_origin.iter().filter(|p| **p == Position::new(1, 0)).count(), 2);
        assert_eq!(around_origin.iter().filter(|p| **p == Position::new(0, 1)).count(), 2);

        let strip = world(3, 1);
        let around = strip.neighbor_positions(Position::new(0, 0));
        assert_eq!(around.len(), 6);

        let single = world(1, 1);
        assert!(single.neighbor_positions(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn move_slime_allows_stacking() {
        let mut world = GridWorld::create(3, 3, 2, Some(5)).unwrap();
        let target = Position::new(1, 1);
        for slime in world.slimes().collect::<Vec<_>>() {
            world.move_slime(slime, target);
        }
        assert!(world.slimes().all(|s| world.slime_position(s) == target));
    }

    #[test]
    #[should_panic]
    fn patch_outside_grid_panics() {
        world(3, 3).patch(Position::new(3, 0));
    }
}
