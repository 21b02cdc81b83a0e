use super::split::{SplitPolicy, SplitTable};
use super::three_peg::solve3;
use super::Mover;

fn distinct(pegs: [usize; 4]) -> bool {
    (0..4).all(|i| (i + 1..4).all(|j| pegs[i] != pegs[j]))
}

/// Move the top `n` disks of `source` onto `destination` with two auxiliary
/// pegs, parking the top `n - 3` disks on `aux1` while the three largest move
/// across with three pegs.
pub fn solve4<M: Mover + ?Sized>(
    mover: &mut M,
    n: usize,
    source: usize,
    aux1: usize,
    aux2: usize,
    destination: usize,
) -> Result<(), M::Error> {
    debug_assert!(
        distinct([source, aux1, aux2, destination]),
        "pegs must be distinct: {source}, {aux1}, {aux2}, {destination}"
    );

    match n {
        0 => Ok(()),
        1 => mover.move_disk(source, destination),
        2 => {
            mover.move_disk(source, aux1)?;
            mover.move_disk(source, destination)?;
            mover.move_disk(aux1, destination)
        }
        3 => {
            mover.move_disk(source, aux1)?;
            mover.move_disk(source, aux2)?;
            mover.move_disk(source, destination)?;
            mover.move_disk(aux2, destination)?;
            mover.move_disk(aux1, destination)
        }
        _ => {
            solve4(mover, n - 3, source, aux2, destination, aux1)?;
            solve3(mover, 3, source, aux2, destination)?;
            solve4(mover, n - 3, aux1, aux2, source, destination)
        }
    }
}

/// Like [`solve4`], but parks as many disks as `table` says is cheapest.
///
/// `table` must cover `n`; heights it does not cover are moved with the fixed split.
pub fn solve4_with_table<M: Mover + ?Sized>(
    mover: &mut M,
    table: &SplitTable,
    n: usize,
    source: usize,
    aux1: usize,
    aux2: usize,
    destination: usize,
) -> Result<(), M::Error> {
    debug_assert!(
        distinct([source, aux1, aux2, destination]),
        "pegs must be distinct: {source}, {aux1}, {aux2}, {destination}"
    );

    let parked = match (n, table.parked(n)) {
        (0, _) => return Ok(()),
        (1, _) => return mover.move_disk(source, destination),
        (_, Some(parked)) => parked,
        (_, None) => return solve4(mover, n, source, aux1, aux2, destination),
    };

    solve4_with_table(mover, table, parked, source, aux2, destination, aux1)?;
    solve3(mover, n - parked, source, aux2, destination)?;
    solve4_with_table(mover, table, parked, aux1, aux2, source, destination)
}

/// Number of moves the four-peg solver emits for `n` disks under `policy`,
/// saturating at `u64::MAX`.
pub fn four_peg_moves(n: usize, policy: SplitPolicy) -> u64 {
    match policy {
        SplitPolicy::Fixed => {
            // T(n) = 2 T(n - 3) + 7, seeded by the three direct cases.
            let (mut height, mut moves): (usize, u64) = match (n, n % 3) {
                (0, _) => (0, 0),
                (_, 1) => (1, 1),
                (_, 2) => (2, 3),
                _ => (3, 5),
            };
            while height < n {
                moves = moves.saturating_mul(2).saturating_add(7);
                height += 3;
            }
            moves
        }
        SplitPolicy::FrameStewart => SplitTable::new(n).moves(n).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Disk, MoveSequence, PegBoard};
    use crate::solver::three_peg_moves;

    fn filled(disks: usize) -> PegBoard {
        let mut board = PegBoard::new(4).unwrap();
        board.fill_first_peg(disks).unwrap();
        board
    }

    #[test]
    fn test_three_disk_base_case() {
        let mut board = filled(3);
        solve4(&mut board, 3, 0, 1, 2, 3).unwrap();
        assert_eq!(
            board.history(),
            &MoveSequence::from_moves([(0, 1), (0, 2), (0, 3), (2, 3), (1, 3)])
        );
        assert_eq!(board.stack(3), &[Disk::new(3), Disk::new(2), Disk::new(1)]);
    }

    #[test]
    fn test_two_disk_base_case() {
        let mut board = filled(2);
        solve4(&mut board, 2, 0, 1, 2, 3).unwrap();
        assert_eq!(
            board.history(),
            &MoveSequence::from_moves([(0, 1), (0, 3), (1, 3)])
        );
        assert_eq!(board.stack(3), &[Disk::new(2), Disk::new(1)]);
    }

    #[test]
    fn test_large_stack_count_matches_closed_form() {
        let mut board = filled(40);
        solve4(&mut board, 40, 0, 1, 2, 3).unwrap();
        assert!(board.is_complete(3));
        assert_eq!(board.move_count() as u64, four_peg_moves(40, SplitPolicy::Fixed));
    }

    #[test]
    fn test_four_disks_trace() {
        let mut board = filled(4);
        solve4(&mut board, 4, 0, 1, 2, 3).unwrap();
        assert_eq!(
            board.history(),
            &MoveSequence::from_moves([
                (0, 1),
                (0, 3),
                (0, 2),
                (3, 2),
                (0, 3),
                (2, 0),
                (2, 3),
                (0, 3),
                (1, 3),
            ])
        );
        assert!(board.is_complete(3));
    }

    #[test]
    fn test_transfers_up_to_fifteen_disks() {
        let expected = [1, 3, 5, 9, 13, 17, 25, 33, 41, 57, 73, 89, 121, 153, 185];
        for n in 1..=15 {
            let mut board = filled(n);
            solve4(&mut board, n, 0, 1, 2, 3).unwrap();
            assert!(board.is_complete(3), "n = {n}");
            assert!((0..3).all(|peg| board.is_empty(peg)), "n = {n}");
            assert_eq!(board.move_count() as u64, expected[n - 1], "n = {n}");
            assert_eq!(four_peg_moves(n, SplitPolicy::Fixed), expected[n - 1]);
        }
    }

    #[test]
    fn test_four_pegs_beat_three() {
        for n in 4..=20 {
            assert!(
                four_peg_moves(n, SplitPolicy::Fixed) < three_peg_moves(n),
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_frame_stewart_matches_table() {
        let table = SplitTable::new(15);
        for n in 1..=15 {
            let mut board = filled(n);
            solve4_with_table(&mut board, &table, n, 0, 1, 2, 3).unwrap();
            assert!(board.is_complete(3), "n = {n}");
            assert_eq!(Some(board.move_count() as u64), table.moves(n));
        }
    }

    #[test]
    fn test_frame_stewart_never_worse_than_fixed() {
        for n in 1..=30 {
            assert!(
                four_peg_moves(n, SplitPolicy::FrameStewart) <= four_peg_moves(n, SplitPolicy::Fixed)
            );
        }
        assert_eq!(four_peg_moves(10, SplitPolicy::FrameStewart), 49);
        assert_eq!(four_peg_moves(10, SplitPolicy::Fixed), 57);
    }

    #[test]
    fn test_table_too_small_falls_back_to_fixed() {
        let table = SplitTable::new(2);
        let mut board = filled(7);
        solve4_with_table(&mut board, &table, 7, 0, 1, 2, 3).unwrap();
        assert_eq!(board.move_count(), 25);
        assert!(board.is_complete(3));
    }

    #[test]
    fn test_non_standard_peg_order() {
        let mut board = filled(6);
        solve4(&mut board, 6, 0, 3, 1, 2).unwrap();
        assert!(board.is_complete(2));
    }

    #[test]
    fn test_mismatched_board_aborts() {
        let mut board = filled(2);
        assert!(solve4(&mut board, 3, 0, 1, 2, 3).is_err());
        assert!(board.move_count() < 5);
    }

    #[test]
    fn test_plan_without_board() {
        let mut seq = MoveSequence::new();
        solve4(&mut seq, 5, 0, 1, 2, 3).unwrap();
        assert_eq!(seq.len(), 13);
        let board = seq.replay(4, 5).unwrap();
        assert!(board.is_complete(3));
    }
}
