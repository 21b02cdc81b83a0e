use super::Mover;

/// Move the top `n` disks of `source` onto `destination`, using `spare` as the
/// only intermediate peg. Emits exactly `2^n - 1` moves.
pub fn solve3<M: Mover + ?Sized>(
    mover: &mut M,
    n: usize,
    source: usize,
    spare: usize,
    destination: usize,
) -> Result<(), M::Error> {
    debug_assert!(
        source != spare && source != destination && spare != destination,
        "pegs must be distinct: {source}, {spare}, {destination}"
    );

    if n == 0 {
        return Ok(());
    }
    solve3(mover, n - 1, source, destination, spare)?;
    mover.move_disk(source, destination)?;
    solve3(mover, n - 1, spare, source, destination)
}

/// Number of moves `solve3` emits for `n` disks, saturating at `u64::MAX`.
pub fn three_peg_moves(n: usize) -> u64 {
    if n >= u64::BITS as usize {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
