//! The N×N maze grid and its treasure overlay.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::cell::{Cell, CellType};
use crate::core::{Direction, Position};

/// Hole positions in row-major scan order.
pub type HoleRing = SmallVec<[Position; 8]>;

/// A square maze.
///
/// Cells are stored row-major. Walls are kept symmetric: every wall change
/// updates both cells of the pair, and the border is always walled.
///
/// `Clone` is a full structural copy; nothing is shared with the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    size: usize,
    cells: Vec<Cell>,

    /// Live treasure position (meaningful while `treasure_on_map`).
    pub treasure: Position,
    pub treasure_on_map: bool,
    /// Where the treasure spawned; a dragon sends it back here.
    pub treasure_start: Position,
}

impl Maze {
    /// An N×N grid with every wall standing, border included.
    ///
    /// Carving is the generator's job; no interior wall is removed here.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::walled(); size * size],
            treasure: Position::new(0, 0),
            treasure_on_map: false,
            treasure_start: Position::new(0, 0),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell storage covers the whole grid. Always true for a
    /// maze built through [`Maze::new`]; a decoded one may not be.
    #[must_use]
    pub fn has_full_grid(&self) -> bool {
        self.cells.len() == self.size * self.size
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.row >= 0 && pos.row < n && pos.col >= 0 && pos.col < n
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.size + pos.col as usize)
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let i = self.offset(pos)?;
        Some(&mut self.cells[i])
    }

    /// Cell type at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, pos: Position) -> Option<CellType> {
        self.get(pos).map(|c| c.kind)
    }

    /// Overwrite the type at `pos`. Ignored outside the grid.
    pub fn set_kind(&mut self, pos: Position, kind: CellType) {
        if let Some(cell) = self.get_mut(pos) {
            cell.kind = kind;
        }
    }

    #[must_use]
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.kind(pos) == Some(CellType::Empty)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.size as i32;
        (0..n).flat_map(move |r| (0..n).map(move |c| Position::new(r, c)))
    }

    // === Walls ===

    /// Whether leaving `pos` towards `dir` is blocked. Outside the grid
    /// everything counts as walled.
    #[must_use]
    pub fn has_wall(&self, pos: Position, dir: Direction) -> bool {
        self.get(pos).map_or(true, |c| c.walls[dir])
    }

    /// Raise the wall on the `dir` side of `pos` and the matching side of
    /// its neighbor.
    pub fn add_wall(&mut self, pos: Position, dir: Direction) {
        if let Some(cell) = self.get_mut(pos) {
            cell.walls[dir] = true;
        }
        if let Some(cell) = self.get_mut(pos.neighbor(dir)) {
            cell.walls[dir.opposite()] = true;
        }
    }

    /// Knock down the wall between `pos` and its neighbor in `dir`.
    ///
    /// Border walls are permanent: returns `false` without changing anything
    /// if either side lies outside the grid. Otherwise returns whether a
    /// wall was actually standing.
    pub fn remove_wall_between(&mut self, pos: Position, dir: Direction) -> bool {
        let next = pos.neighbor(dir);
        if !self.in_bounds(pos) || !self.in_bounds(next) {
            return false;
        }

        let was_standing = self.has_wall(pos, dir);
        if let Some(cell) = self.get_mut(pos) {
            cell.walls[dir] = false;
        }
        if let Some(cell) = self.get_mut(next) {
            cell.walls[dir.opposite()] = false;
        }
        was_standing
    }

    /// Number of interior edges with no wall.
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.in_bounds(pos.neighbor(dir)) && !self.has_wall(pos, dir))
                    .count()
            })
            .sum()
    }

    /// Check the wall invariant: symmetric between neighbors, closed at
    /// the border.
    #[must_use]
    pub fn walls_are_symmetric(&self) -> bool {
        self.positions().all(|pos| {
            Direction::ALL.into_iter().all(|dir| {
                let next = pos.neighbor(dir);
                match self.get(next) {
                    Some(other) => self.has_wall(pos, dir) == other.walls[dir.opposite()],
                    None => self.has_wall(pos, dir),
                }
            })
        })
    }

    // === Lookups ===

    /// First cell of `kind` in row-major order.
    #[must_use]
    pub fn find_first(&self, kind: CellType) -> Option<Position> {
        self.positions().find(|&pos| self.kind(pos) == Some(kind))
    }

    /// The exit cell.
    #[must_use]
    pub fn find_exit(&self) -> Option<Position> {
        self.find_first(CellType::Exit)
    }

    /// Every cell of `kind`, row-major.
    #[must_use]
    pub fn positions_of(&self, kind: CellType) -> Vec<Position> {
        self.positions().filter(|&pos| self.kind(pos) == Some(kind)).collect()
    }

    /// Holes in row-major order; the teleport ring.
    #[must_use]
    pub fn hole_ring(&self) -> HoleRing {
        self.positions()
            .filter(|&pos| self.kind(pos) == Some(CellType::Hole))
            .collect()
    }

    /// Where a player standing on the hole at `from` is teleported to.
    ///
    /// `None` when `from` is not a hole or there is no other hole.
    #[must_use]
    pub fn next_hole(&self, from: Position) -> Option<Position> {
        let ring = self.hole_ring();
        if ring.len() < 2 {
            return None;
        }
        let current = ring.iter().position(|&p| p == from)?;
        Some(ring[(current + 1) % ring.len()])
    }

    /// The river from its source to the estuary, following `river_dir`.
    ///
    /// `None` when the maze has no estuary. Stops early if the chain is
    /// broken or loops.
    #[must_use]
    pub fn river_path(&self) -> Option<Vec<Position>> {
        let estuary = self.find_first(CellType::Estuary)?;
        let rivers = self.positions_of(CellType::River);

        let feeds = |target: Position| {
            rivers.iter().copied().find(|&p| {
                self.get(p)
                    .and_then(|c| c.river_dir)
                    .map_or(false, |dir| p.neighbor(dir) == target)
            })
        };

        let mut path = vec![estuary];
        let mut cursor = estuary;
        while let Some(prev) = feeds(cursor) {
            if path.contains(&prev) {
                break;
            }
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        Some(path)
    }

    // === Treasure overlay ===

    /// Whether the live treasure sits at `pos`.
    #[must_use]
    pub fn treasure_at(&self, pos: Position) -> bool {
        self.treasure_on_map && self.treasure == pos
    }

    /// Spawn the treasure at `pos` and make it the respawn anchor.
    pub fn place_treasure(&mut self, pos: Position) {
        self.treasure = pos;
        self.treasure_start = pos;
        self.treasure_on_map = true;
    }

    /// Take the treasure off the map.
    pub fn pick_up_treasure(&mut self) {
        self.treasure_on_map = false;
    }

    /// Put the treasure back on the map at `pos`.
    pub fn drop_treasure_at(&mut self, pos: Position) {
        self.treasure = pos;
        self.treasure_on_map = true;
    }

    /// Send the treasure back to where it spawned.
    pub fn respawn_treasure(&mut self) {
        self.drop_treasure_at(self.treasure_start);
    }
}

impl Index<Position> for Maze {
    type Output = Cell;

    /// Panics outside the grid; use [`Maze::get`] when unsure.
    fn index(&self, pos: Position) -> &Self::Output {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} outside {0}x{0} maze", self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_maze_is_fully_walled() {
        let maze = Maze::new(4);

        assert_eq!(maze.size(), 4);
        assert_eq!(maze.positions().count(), 16);
        assert_eq!(maze.open_edge_count(), 0);
        assert!(maze.walls_are_symmetric());
        assert!(maze.positions().all(|pos| maze.is_empty_cell(pos)));
        assert!(!maze.treasure_on_map);
    }

    #[test]
    fn test_in_bounds() {
        let maze = Maze::new(3);
        assert!(maze.in_bounds(p(0, 0)));
        assert!(maze.in_bounds(p(2, 2)));
        assert!(!maze.in_bounds(p(-1, 0)));
        assert!(!maze.in_bounds(p(0, 3)));
        assert!(maze.get(p(3, 0)).is_none());
    }

    #[test]
    fn test_remove_wall_updates_both_sides() {
        let mut maze = Maze::new(3);

        assert!(maze.remove_wall_between(p(1, 1), Direction::Right));
        assert!(!maze.has_wall(p(1, 1), Direction::Right));
        assert!(!maze.has_wall(p(1, 2), Direction::Left));
        assert!(maze.walls_are_symmetric());
        assert_eq!(maze.open_edge_count(), 1);

        // Second removal finds nothing standing.
        assert!(!maze.remove_wall_between(p(1, 2), Direction::Left));
        assert_eq!(maze.open_edge_count(), 1);
    }

    #[test]
    fn test_border_walls_are_permanent() {
        let mut maze = Maze::new(3);

        assert!(!maze.remove_wall_between(p(0, 0), Direction::Up));
        assert!(!maze.remove_wall_between(p(2, 1), Direction::Down));
        assert!(maze.has_wall(p(0, 0), Direction::Up));
        assert!(maze.has_wall(p(2, 1), Direction::Down));
        assert!(maze.walls_are_symmetric());
    }

    #[test]
    fn test_add_wall_restores_symmetry() {
        let mut maze = Maze::new(3);
        maze.remove_wall_between(p(0, 0), Direction::Down);
        maze.add_wall(p(1, 0), Direction::Up);

        assert!(maze.has_wall(p(0, 0), Direction::Down));
        assert!(maze.has_wall(p(1, 0), Direction::Up));
        assert!(maze.walls_are_symmetric());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Maze::new(3);
        original.place_treasure(p(2, 2));

        let mut copy = original.clone();
        copy.remove_wall_between(p(0, 0), Direction::Right);
        copy.set_kind(p(1, 1), CellType::Dragon);
        copy.pick_up_treasure();

        assert!(original.has_wall(p(0, 0), Direction::Right));
        assert_eq!(original.kind(p(1, 1)), Some(CellType::Empty));
        assert!(original.treasure_at(p(2, 2)));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_find_exit_and_positions_of() {
        let mut maze = Maze::new(3);
        assert_eq!(maze.find_exit(), None);

        maze.set_kind(p(2, 1), CellType::Exit);
        maze.set_kind(p(0, 2), CellType::Armory);
        maze.set_kind(p(1, 0), CellType::Armory);

        assert_eq!(maze.find_exit(), Some(p(2, 1)));
        assert_eq!(maze.positions_of(CellType::Armory), vec![p(0, 2), p(1, 0)]);
    }

    #[test]
    fn test_hole_ring_wraps() {
        let mut maze = Maze::new(4);
        maze.set_kind(p(3, 0), CellType::Hole);
        maze.set_kind(p(0, 3), CellType::Hole);
        maze.set_kind(p(1, 1), CellType::Hole);

        assert_eq!(maze.hole_ring().as_slice(), &[p(0, 3), p(1, 1), p(3, 0)]);
        assert_eq!(maze.next_hole(p(0, 3)), Some(p(1, 1)));
        assert_eq!(maze.next_hole(p(1, 1)), Some(p(3, 0)));
        assert_eq!(maze.next_hole(p(3, 0)), Some(p(0, 3)));
        assert_eq!(maze.next_hole(p(2, 2)), None);
    }

    #[test]
    fn test_single_hole_goes_nowhere() {
        let mut maze = Maze::new(3);
        maze.set_kind(p(1, 1), CellType::Hole);
        assert_eq!(maze.next_hole(p(1, 1)), None);
    }

    #[test]
    fn test_river_path_follows_flow() {
        let mut maze = Maze::new(4);
        maze.get_mut(p(1, 0)).unwrap().make_river(Direction::Right);
        maze.get_mut(p(1, 1)).unwrap().make_river(Direction::Down);
        maze.get_mut(p(2, 1)).unwrap().make_estuary(Direction::Down);

        assert_eq!(maze.river_path(), Some(vec![p(1, 0), p(1, 1), p(2, 1)]));
    }

    #[test]
    fn test_treasure_overlay() {
        let mut maze = Maze::new(3);
        maze.place_treasure(p(0, 1));
        assert!(maze.treasure_at(p(0, 1)));
        assert_eq!(maze.treasure_start, p(0, 1));

        maze.pick_up_treasure();
        assert!(!maze.treasure_at(p(0, 1)));

        maze.drop_treasure_at(p(2, 2));
        assert!(maze.treasure_at(p(2, 2)));
        assert_eq!(maze.treasure_start, p(0, 1));

        maze.respawn_treasure();
        assert!(maze.treasure_at(p(0, 1)));
    }

    #[test]
    #[should_panic(expected = "outside 3x3 maze")]
    fn test_index_out_of_bounds_panics() {
        let maze = Maze::new(3);
        let _ = &maze[p(3, 3)];
    }
}
