use std::collections::VecDeque;

use maze_core::MazeLayout;
use maze_core::engine::{MarkOutcome, MarkOverlay, MazeGraph, WallGeometry};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn maze(rows: usize, cols: usize, seed: u64) -> MazeGraph {
    MazeGraph::generate(rows, cols, &mut StdRng::seed_from_u64(seed)).unwrap()
}

fn open_slots(maze: &MazeGraph) -> usize {
    let (rows, cols) = (maze.rows() as i32, maze.cols() as i32);
    let h = (0..=rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| !maze.is_horizontal_wall(r, c))
        .count();
    let v = (0..rows)
        .flat_map(|r| (0..=cols).map(move |c| (r, c)))
        .filter(|&(r, c)| !maze.is_vertical_wall(r, c))
        .count();
    h + v
}

fn reachable(maze: &MazeGraph) -> usize {
    let mut seen = vec![false; maze.rows() * maze.cols()];
    let mut queue = VecDeque::from([(0, 0)]);
    seen[0] = true;
    let mut count = 1;
    while let Some((r, c)) = queue.pop_front() {
        for (nr, nc) in maze.open_neighbors(r, c) {
            let i = nr * maze.cols() + nc;
            if !seen[i] {
                seen[i] = true;
                count += 1;
                queue.push_back((nr, nc));
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn spanning_tree_plus_entrance(rows in 1usize..12, cols in 1usize..12, seed in any::<u64>()) {
        let m = maze(rows, cols, seed);
        prop_assert_eq!(open_slots(&m), rows * cols);
        prop_assert_eq!(reachable(&m), rows * cols);
        let (er, ec) = m.entrance();
        prop_assert!(!m.is_horizontal_wall(er as i32, ec as i32));
    }

    #[test]
    fn boundary_stays_closed_except_entrance(rows in 1usize..10, cols in 1usize..10, seed in any::<u64>()) {
        let m = maze(rows, cols, seed);
        for c in 0..cols as i32 {
            prop_assert!(m.is_horizontal_wall(rows as i32, c));
            if c as usize != cols / 2 {
                prop_assert!(m.is_horizontal_wall(0, c));
            }
        }
        for r in 0..rows as i32 {
            prop_assert!(m.is_vertical_wall(r, 0));
            prop_assert!(m.is_vertical_wall(r, cols as i32));
        }
    }

    #[test]
    fn out_of_range_is_never_a_wall(
        rows in 1usize..8,
        cols in 1usize..8,
        r in -20i32..20,
        c in -20i32..20,
    ) {
        let m = maze(rows, cols, 7);
        if r < 0 || c < 0 || r > rows as i32 || c >= cols as i32 {
            prop_assert!(!m.is_horizontal_wall(r, c));
        }
        if r < 0 || c < 0 || r >= rows as i32 || c > cols as i32 {
            prop_assert!(!m.is_vertical_wall(r, c));
        }
    }

    #[test]
    fn wall_boxes_stay_inside_extent(rows in 1usize..10, cols in 1usize..10, seed in any::<u64>()) {
        let m = maze(rows, cols, seed);
        let layout = MazeLayout::default();
        let extent = layout.extent(rows, cols);
        for wall in WallGeometry::new(&m, layout).boxes() {
            prop_assert!(wall.min().cmpge(glam::Vec3::splat(-1e-4)).all());
            prop_assert!(wall.max().cmple(extent + 1e-4).all());
            prop_assert!(wall.size().x >= layout.wall_width - 1e-5);
            prop_assert!(wall.size().z >= layout.wall_width - 1e-5);
        }
    }

    #[test]
    fn marks_never_land_on_walls(rows in 1usize..8, cols in 1usize..8, seed in any::<u64>()) {
        let m = maze(rows, cols, seed);
        let mut marks = MarkOverlay::new(&m);
        for r in 0..=rows as i32 {
            for c in 0..cols as i32 {
                if marks.toggle_horizontal(&m, r, c) == MarkOutcome::WallPresent {
                    prop_assert!(m.is_horizontal_wall(r, c));
                }
            }
        }
        for (_, r, c) in marks.marked() {
            prop_assert!(!m.is_horizontal_wall(r as i32, c as i32));
        }
    }
}

#[test]
fn single_cell_maze() {
    let m = maze(1, 1, 0);
    assert_eq!(m.entrance(), (0, 0));
    assert!(!m.is_horizontal_wall(0, 0));
    assert!(m.is_horizontal_wall(1, 0));
    assert!(m.is_vertical_wall(0, 0));
    assert!(m.is_vertical_wall(0, 1));
    assert_eq!(m.open_neighbors(0, 0).count(), 0);
    assert_eq!(WallGeometry::new(&m, MazeLayout::default()).boxes().len(), 3);
}

#[test]
fn zero_dimensions_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(MazeGraph::generate(0, 3, &mut rng).is_err());
    assert!(MazeGraph::generate(3, 0, &mut rng).is_err());
}
