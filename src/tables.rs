//! Compile-time lookup tables mapping every valid field value to its
//! fixed-width zero-padded decimal byte string.
//!
//! Built entirely in `const` context, so the tables live in read-only static
//! memory with no runtime initialization. The year table is the big one at
//! 10_000 x 4 bytes; everything else is trivial.

/// `YEARS[y]` is the 4-digit rendering of `y`, e.g. `YEARS[7] == *b"0007"`.
pub static YEARS: [[u8; 4]; 10_000] = build(0);
/// Indexed by `month - 1`.
pub static MONTHS: [[u8; 2]; 12] = build(1);
/// Indexed by `day - 1`.
pub static DAYS: [[u8; 2]; 31] = build(1);
pub static HOURS: [[u8; 2]; 24] = build(0);
/// Shared by minutes and seconds, both 0..=59.
pub static MIN_SEC: [[u8; 2]; 60] = build(0);

/// Render `from..from + N` as `W`-wide zero-padded decimal strings.
const fn build<const W: usize, const N: usize>(from: u32) -> [[u8; W]; N] {
    let mut values = [[b'0'; W]; N];
    let mut i = 0;
    while i < N {
        let mut val = from + i as u32;
        let mut ch = W;
        while val > 0 && ch > 0 {
            ch -= 1;
            values[i][ch] = b'0' + (val % 10) as u8;
            val /= 10;
        }
        i += 1;
    }
    values
}

#[inline]
pub fn year(year: u16) -> &'static [u8; 4] {
    &YEARS[year as usize]
}

#[inline]
pub fn month(month: u8) -> &'static [u8; 2] {
    &MONTHS[month as usize - 1]
}

#[inline]
pub fn day(day: u8) -> &'static [u8; 2] {
    &DAYS[day as usize - 1]
}

#[inline]
pub fn hour(hour: u8) -> &'static [u8; 2] {
    &HOURS[hour as usize]
}

#[inline]
pub fn min_sec(value: u8) -> &'static [u8; 2] {
    &MIN_SEC[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_table_boundaries() {
        assert_eq!(year(0), b"0000");
        assert_eq!(year(7), b"0007");
        assert_eq!(year(42), b"0042");
        assert_eq!(year(999), b"0999");
        assert_eq!(year(9999), b"9999");
    }

    #[test]
    fn two_digit_tables() {
        assert_eq!(month(1), b"01");
        assert_eq!(month(12), b"12");
        assert_eq!(day(1), b"01");
        assert_eq!(day(31), b"31");
        assert_eq!(hour(0), b"00");
        assert_eq!(hour(23), b"23");
        assert_eq!(min_sec(0), b"00");
        assert_eq!(min_sec(9), b"09");
        assert_eq!(min_sec(59), b"59");
    }

    #[test]
    fn every_entry_is_ascii_digits() {
        for entry in YEARS.iter() {
            assert!(entry.iter().all(u8::is_ascii_digit));
        }
        for entry in MIN_SEC.iter() {
            assert!(entry.iter().all(u8::is_ascii_digit));
        }
    }
}
