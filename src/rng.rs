use getrandom::getrandom;
use oorandom::Rand64;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

pub fn os_random_seed() -> Result<u128, getrandom::Error> {
    let mut buf = [0; 16];
    getrandom(&mut buf)?;
    Ok(u128::from_le_bytes(buf))
}

/// Draws uniformly from the inclusive range `[low, high]`.
/// The full `u64` range is special cased, since its exclusive end is not representable.
pub fn inclusive_range(rng: &mut Rand64, (low, high): (u64, u64)) -> u64 {
    debug_assert!(low <= high);
    match high.checked_add(1) {
        Some(end) => rng.rand_range(low..end),
        None if low == 0 => rng.rand_u64(),
        None => rng.rand_range(low - 1..high) + 1,
    }
}
