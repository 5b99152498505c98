/// Deterministic pseudo-random sample of `len` values in `0..range`.
pub fn sample(len: usize, range: i64) -> Vec<i64> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % range as u64) as i64
        })
        .collect()
}
