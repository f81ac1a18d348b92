#[cfg(test)]
mod tests {
    use crate::automaton::grid::{accumulate, decode};
    use crate::automaton::seeding::{self, BEACON, BLOCK, GLIDER};
    use crate::automaton::stepping::{step, Stepper};
    use crate::automaton::{AliveSet, Coordinate};
    use crate::state::Board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const RING: [(i32, i32); 8] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 2),
        (2, 2),
        (2, 1),
        (2, 0),
        (1, 0),
    ];

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn set(cells: &[(i32, i32)]) -> AliveSet {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_empty_grid_is_fixpoint() {
        let gen = step(&accumulate(&AliveSet::new(), 12, 9).unwrap());
        assert!(gen.alive.is_empty());
        assert_eq!(gen.verdicts.alive_count(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let block = set(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let gen = step(&accumulate(&block, 6, 6).unwrap());
        assert_eq!(gen.alive, block);
    }

    #[test]
    fn test_birth_rule() {
        let gen = step(&accumulate(&set(&[(1, 1), (1, 2), (2, 1)]), 5, 5).unwrap());
        assert_eq!(gen.verdicts.get(Coordinate::new(2, 2)), Some(true));
    }

    #[test]
    fn test_death_by_isolation() {
        let votes = accumulate(&set(&[(3, 3)]), 7, 7).unwrap();
        assert_eq!(votes.get(4, 4), Some(1));
        assert!(step(&votes).alive.is_empty());
    }

    #[test]
    fn test_death_by_overcrowding() {
        let cells = [(2, 2), (1, 1), (1, 3), (3, 1), (3, 3)];
        let votes = accumulate(&set(&cells), 5, 5).unwrap();
        assert_eq!(votes.get(3, 3), Some(41));
        assert_eq!(step(&votes).verdicts.get(Coordinate::new(2, 2)), Some(false));
    }

    #[test]
    fn test_encoding_covers_all_neighborhoods() {
        // Every (neighbors, self) pair, built as a real neighborhood around (1, 1)
        let mut alive_pairs = Vec::new();
        let mut seen_values = HashSet::new();

        for n in 0..=8usize {
            for s in [false, true] {
                let mut cells: AliveSet = RING[..n].iter().copied().map(Coordinate::from).collect();
                if s {
                    cells.insert(Coordinate::new(1, 1));
                }

                let votes = accumulate(&cells, 3, 3).unwrap();
                let value = votes.get(2, 2).unwrap();
                assert_eq!(value as usize, 10 * n + usize::from(s));
                assert_eq!(decode(value), (n as u8, s));
                assert!(seen_values.insert(value), "value {} not unique", value);

                if step(&votes).verdicts.get(Coordinate::new(1, 1)) == Some(true) {
                    alive_pairs.push((n, s));
                }
            }
        }

        assert_eq!(seen_values.len(), 18);
        alive_pairs.sort();
        assert_eq!(alive_pairs, vec![(2, true), (3, false), (3, true)]);
    }

    #[test]
    fn test_set_alive_twice_is_idempotent() {
        let mut board = Board::new(4, 4).unwrap();
        let c = Coordinate::new(2, 3);
        board.set_alive(c, true).unwrap();
        let after_first = board.alive().clone();
        board.set_alive(c, true).unwrap();
        assert_eq!(board.alive(), &after_first);
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn test_verdict_completeness() {
        for (rows, cols) in [(1, 1), (3, 8), (8, 3), (17, 17)] {
            let gen = step(&accumulate(&set(&[(0, 0)]), rows, cols).unwrap());
            assert_eq!(gen.verdicts.len(), rows * cols);

            let coords: HashSet<Coordinate> = gen.verdicts.iter().map(|(c, _)| c).collect();
            assert_eq!(coords.len(), rows * cols);
            assert!(coords.iter().all(|&c| c.row >= 0
                && c.col >= 0
                && (c.row as usize) < rows
                && (c.col as usize) < cols));
        }
    }

    #[test]
    fn test_verdicts_agree_with_alive_set() {
        let mut board = Board::new(20, 20).unwrap();
        seeding::random_fill(&mut board, 0.35, &mut StdRng::seed_from_u64(11)).unwrap();
        let stepper = Stepper::new(2).unwrap();
        let report = board.advance(&stepper).unwrap();

        for (coord, alive) in report.verdicts.iter() {
            assert_eq!(board.is_alive(coord), alive, "mismatch at {}", coord);
        }
        assert_eq!(report.verdicts.alive_count(), board.population());
    }

    #[test]
    fn test_glider_translates() {
        init_tracing();
        let stepper = Stepper::new(1).unwrap();
        let mut board = Board::new(12, 12).unwrap();
        seeding::stamp(&mut board, &GLIDER, Coordinate::new(1, 1)).unwrap();
        let start = board.alive().clone();

        for _ in 0..4 {
            board.advance(&stepper).unwrap();
        }

        let shifted: AliveSet = start.iter().filter_map(|c| c.offset(1, 1)).collect();
        assert_eq!(board.alive(), &shifted);
        assert_eq!(board.generation(), 4);
    }

    #[test]
    fn test_glider_is_truncated_at_edge() {
        let stepper = Stepper::new(1).unwrap();
        let mut board = Board::new(6, 6).unwrap();
        seeding::stamp(&mut board, &GLIDER, Coordinate::new(1, 1)).unwrap();

        for _ in 0..20 {
            let report = board.advance(&stepper).unwrap();
            assert_eq!(report.verdicts.len(), 36);
        }

        // Clipped at the corner, the glider collapses into a block.
        assert_eq!(board.alive(), &set(&[(4, 4), (4, 5), (5, 4), (5, 5)]));
    }

    #[test]
    fn test_beacon_period_two() {
        let stepper = Stepper::new(1).unwrap();
        let mut board = Board::new(8, 8).unwrap();
        seeding::stamp(&mut board, &BEACON, Coordinate::new(2, 2)).unwrap();
        let start = board.alive().clone();

        let first = board.advance(&stepper).unwrap();
        assert_eq!(first.population, 6);
        board.advance(&stepper).unwrap();
        assert_eq!(board.alive(), &start);
    }

    #[test]
    fn test_thread_count_does_not_change_result() {
        let mut a = Board::new(40, 31).unwrap();
        seeding::random_fill(&mut a, 0.3, &mut StdRng::seed_from_u64(2024)).unwrap();
        let mut b = a.clone();

        let one = Stepper::new(1).unwrap();
        let four = Stepper::new(4).unwrap();
        for _ in 0..10 {
            let ra = a.advance(&one).unwrap();
            let rb = b.advance(&four).unwrap();
            assert_eq!(ra, rb);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        let stepper = Stepper::new(1).unwrap();
        let mut board = Board::new(2, 2).unwrap();
        seeding::stamp(&mut board, &BLOCK, Coordinate::new(0, 0)).unwrap();
        let report = board.advance(&stepper).unwrap();
        assert_eq!(report.population, 4);
        assert_eq!((report.births, report.deaths), (0, 0));
    }
}
