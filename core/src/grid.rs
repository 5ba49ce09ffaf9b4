use crate::earthquake::{Earthquake, QUAKE_RADIUS};

// Cells raised by mountain formation never sit below this value
pub const MOUNTAIN_FLOOR: u32 = 2;
// Half-width of the mountain block (5x5)
pub const MOUNTAIN_RADIUS: i32 = 2;

// 2D height map: row-major Vec<Vec<f32>>, access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Plate ownership / elevation markers.
// 0 = water, k > 0 = claimed by plate k - 1 (or raised terrain).
// Access as `cells[y][x]`; the dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<u32>>,
}

impl TerrainGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, value: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![value; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if self.in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    // Returns false (and writes nothing) when (x, y) is off the grid
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: u32) -> bool {
        if self.in_bounds(x, y) {
            self.cells[y as usize][x as usize] = value;
            true
        } else {
            false
        }
    }

    // Apply `f` to every in-bounds cell of the square of half-width `radius` around (cx, cy)
    fn update_square(&mut self, cx: i32, cy: i32, radius: i32, f: impl Fn(u32) -> u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let (x, y) = (cx + dx, cy + dy);
                if self.in_bounds(x, y) {
                    let cell = &mut self.cells[y as usize][x as usize];
                    *cell = f(*cell);
                }
            }
        }
    }

    /// Raise the 5x5 block centered at (x, y) to at least [`MOUNTAIN_FLOOR`].
    /// Never lowers a cell.
    pub fn create_mountains(&mut self, x: i32, y: i32) {
        self.update_square(x, y, MOUNTAIN_RADIUS, |v| v.max(MOUNTAIN_FLOOR));
    }

    /// Subtract the quake magnitude from the 7x7 block around its epicenter,
    /// flooring at zero.
    pub fn apply_earthquake(&mut self, quake: &Earthquake) {
        let magnitude = quake.magnitude;
        self.update_square(quake.x, quake.y, QUAKE_RADIUS, |v| v.saturating_sub(magnitude));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_checks() {
        let mut g = TerrainGrid::new(4, 3);
        assert!(g.in_bounds(3, 2));
        assert!(!g.in_bounds(4, 2));
        assert!(!g.in_bounds(-1, 0));
        assert_eq!(g.get(0, 3), None);
        assert!(!g.set(-2, 1, 7));
        assert!(g.set(1, 1, 7));
        assert_eq!(g.get(1, 1), Some(7));
    }

    #[test]
    fn mountains_fill_five_by_five_block() {
        let mut g = TerrainGrid::new(10, 10);
        g.create_mountains(3, 3);
        for y in 0..10 {
            for x in 0..10 {
                let v = g.get(x, y).unwrap();
                if (1..=5).contains(&x) && (1..=5).contains(&y) {
                    assert!(v >= 2, "({x}, {y}) = {v}");
                } else {
                    assert_eq!(v, 0, "({x}, {y}) should stay water");
                }
            }
        }
    }

    #[test]
    fn mountains_never_lower_terrain() {
        let mut g = TerrainGrid::filled(6, 6, 4);
        g.set(2, 2, 1);
        g.create_mountains(2, 2);
        assert_eq!(g.get(2, 2), Some(2));
        assert_eq!(g.get(0, 0), Some(4));
        assert_eq!(g.get(4, 4), Some(4));
    }

    #[test]
    fn mountains_clip_at_the_edge() {
        let mut g = TerrainGrid::new(3, 3);
        g.create_mountains(0, 0);
        assert_eq!(g.rows(), &[vec![2, 2, 2], vec![2, 2, 2], vec![2, 2, 2]]);
    }

    #[test]
    fn earthquake_floors_at_zero() {
        let mut g = TerrainGrid::filled(20, 20, 5);
        g.apply_earthquake(&Earthquake { x: 10, y: 10, magnitude: 9 });
        for y in 0..20 {
            for x in 0..20 {
                let expected = if (7..=13).contains(&x) && (7..=13).contains(&y) { 0 } else { 5 };
                assert_eq!(g.get(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn weak_earthquake_only_dents() {
        let mut g = TerrainGrid::filled(5, 5, 7);
        g.apply_earthquake(&Earthquake { x: 0, y: 4, magnitude: 4 });
        assert_eq!(g.get(0, 4), Some(3));
        assert_eq!(g.get(3, 1), Some(3));
        assert_eq!(g.get(4, 0), Some(7));
    }
}
