//! The six conversion strategies under comparison.
//!
//! Every converter shares one contract: write `YYYY-MM-DDTHH:MM:SS` for the
//! given record into the destination buffer, followed by a NUL terminator.
//! They differ only in how the bytes get there, so their relative timings
//! isolate one cost dimension each (formatter machinery, single formatted
//! call, dynamic string building, trait dispatch, table lookups, and copy
//! width). The `itoa` variant deliberately skips zero-padding; see
//! [`convert_concat`].

use crate::record::DateTimeRecord;
use crate::tables;

/// Visible length of `YYYY-MM-DDTHH:MM:SS`.
pub const TIMESTAMP_LEN: usize = 19;

/// Destination buffer: 19 visible bytes plus a NUL terminator.
pub type TimestampBuf = [u8; TIMESTAMP_LEN + 1];

pub type ConvertFn = fn(&DateTimeRecord, &mut TimestampBuf);

// Byte layout of the formatted timestamp.
const YEAR_OFFSET: usize = 0;
const YEAR_WIDTH: usize = 4;
const MONTH_OFFSET: usize = 5;
const DAY_OFFSET: usize = 8;
const HOUR_OFFSET: usize = 11;
const MINUTE_OFFSET: usize = 14;
const SECOND_OFFSET: usize = 17;
const FIELD_WIDTH: usize = 2;

/// All converters in the order the harness runs them.
pub const CONVERTERS: &[(&str, ConvertFn)] = &[
    ("fmt::Write stream", convert_stream),
    ("single formatted write", convert_printf),
    ("itoa concat (no leading zeroes)", convert_concat),
    ("Display trait", convert_display),
    ("lookup tables", convert_table),
    ("lookup tables + fixed-width copy", convert_table_fixed),
];

/// The formatted text up to the NUL terminator.
pub fn timestamp_str(buf: &TimestampBuf) -> &str {
    let len = memchr::memchr(0, buf).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..len]).unwrap_or("")
}

fn store(buf: &mut TimestampBuf, text: &str) {
    buf[..text.len()].copy_from_slice(text.as_bytes());
    buf[text.len()] = 0;
}

/// Append each field through `fmt::Write` with explicit zero-fill widths,
/// building the string incrementally.
pub fn convert_stream(record: &DateTimeRecord, out: &mut TimestampBuf) {
    use std::fmt::Write;

    let mut text = String::with_capacity(TIMESTAMP_LEN);
    let _ = write!(text, "{:04}", record.year);
    text.push('-');
    let _ = write!(text, "{:02}", record.month);
    text.push('-');
    let _ = write!(text, "{:02}", record.day);
    text.push('T');
    let _ = write!(text, "{:02}", record.hour);
    text.push(':');
    let _ = write!(text, "{:02}", record.minute);
    text.push(':');
    let _ = write!(text, "{:02}", record.second);
    store(out, &text);
}

/// One formatted write with a single fixed format string into a stack
/// buffer, the closest Rust analogue of `snprintf`.
pub fn convert_printf(record: &DateTimeRecord, out: &mut TimestampBuf) {
    use std::io::Write;

    let mut scratch = [0u8; TIMESTAMP_LEN + 6];
    let mut cursor = &mut scratch[..];
    let _ = write!(
        cursor,
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        record.year, record.month, record.day, record.hour, record.minute, record.second
    );
    out[..TIMESTAMP_LEN].copy_from_slice(&scratch[..TIMESTAMP_LEN]);
    out[TIMESTAMP_LEN] = 0;
}

/// Convert each field with `itoa` and concatenate with separators.
///
/// Intentionally NOT zero-padded: `{7,3,9,1,0,5}` comes out as
/// `"7-3-9T1:0:5"`, shorter and misaligned versus the other five variants.
/// This mirrors plain integer-to-string conversion with no width control and
/// is the documented behavior of this variant, not a bug to fix.
pub fn convert_concat(record: &DateTimeRecord, out: &mut TimestampBuf) {
    let mut digits = itoa::Buffer::new();
    let mut text = String::with_capacity(TIMESTAMP_LEN);
    text.push_str(digits.format(record.year));
    text.push('-');
    text.push_str(digits.format(record.month));
    text.push('-');
    text.push_str(digits.format(record.day));
    text.push('T');
    text.push_str(digits.format(record.hour));
    text.push(':');
    text.push_str(digits.format(record.minute));
    text.push(':');
    text.push_str(digits.format(record.second));
    store(out, &text);
}

/// Route through the record's `Display` impl, paying for the full
/// `fmt::Arguments` dispatch machinery plus a heap `String`. The most
/// abstracted of the formatted variants.
pub fn convert_display(record: &DateTimeRecord, out: &mut TimestampBuf) {
    store(out, &record.to_string());
}

/// Copy precomputed digit strings from the lookup tables into the buffer at
/// fixed offsets, one byte at a time, with literal separators in between.
pub fn convert_table(record: &DateTimeRecord, out: &mut TimestampBuf) {
    copy_bytes(&mut out[YEAR_OFFSET..YEAR_OFFSET + YEAR_WIDTH], tables::year(record.year));
    out[YEAR_OFFSET + YEAR_WIDTH] = b'-';
    copy_bytes(&mut out[MONTH_OFFSET..MONTH_OFFSET + FIELD_WIDTH], tables::month(record.month));
    out[MONTH_OFFSET + FIELD_WIDTH] = b'-';
    copy_bytes(&mut out[DAY_OFFSET..DAY_OFFSET + FIELD_WIDTH], tables::day(record.day));
    out[DAY_OFFSET + FIELD_WIDTH] = b'T';
    copy_bytes(&mut out[HOUR_OFFSET..HOUR_OFFSET + FIELD_WIDTH], tables::hour(record.hour));
    out[HOUR_OFFSET + FIELD_WIDTH] = b':';
    copy_bytes(&mut out[MINUTE_OFFSET..MINUTE_OFFSET + FIELD_WIDTH], tables::min_sec(record.minute));
    out[MINUTE_OFFSET + FIELD_WIDTH] = b':';
    copy_bytes(&mut out[SECOND_OFFSET..SECOND_OFFSET + FIELD_WIDTH], tables::min_sec(record.second));
    out[SECOND_OFFSET + FIELD_WIDTH] = 0;
}

/// Generic byte-wise copy, the baseline `convert_table` is measured with.
#[inline]
fn copy_bytes(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

/// Same tables as [`convert_table`], but every field is stored as one
/// fixed-length array copy, which the compiler lowers to a single 4- or
/// 2-byte move instead of a byte loop.
pub fn convert_table_fixed(record: &DateTimeRecord, out: &mut TimestampBuf) {
    store_fixed::<YEAR_WIDTH>(out, YEAR_OFFSET, tables::year(record.year));
    out[YEAR_OFFSET + YEAR_WIDTH] = b'-';
    store_fixed::<FIELD_WIDTH>(out, MONTH_OFFSET, tables::month(record.month));
    out[MONTH_OFFSET + FIELD_WIDTH] = b'-';
    store_fixed::<FIELD_WIDTH>(out, DAY_OFFSET, tables::day(record.day));
    out[DAY_OFFSET + FIELD_WIDTH] = b'T';
    store_fixed::<FIELD_WIDTH>(out, HOUR_OFFSET, tables::hour(record.hour));
    out[HOUR_OFFSET + FIELD_WIDTH] = b':';
    store_fixed::<FIELD_WIDTH>(out, MINUTE_OFFSET, tables::min_sec(record.minute));
    out[MINUTE_OFFSET + FIELD_WIDTH] = b':';
    store_fixed::<FIELD_WIDTH>(out, SECOND_OFFSET, tables::min_sec(record.second));
    out[SECOND_OFFSET + FIELD_WIDTH] = 0;
}

/// Fixed-width store: the length is a compile-time constant, so this is a
/// single `W`-byte move rather than a variable-length memcpy.
#[inline]
fn store_fixed<const W: usize>(out: &mut TimestampBuf, offset: usize, src: &[u8; W]) {
    let dst: &mut [u8; W] = (&mut out[offset..offset + W])
        .try_into()
        .expect("offset + W within buffer");
    *dst = *src;
}
