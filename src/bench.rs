//! Sequential phase harness: one generation pass, then one full pass per
//! converter over identical input, timing each phase with wall-clock laps.

use std::time::Instant;

use tracing::info;

use crate::convert::{CONVERTERS, TimestampBuf, timestamp_str};
use crate::record::{DateTimeRecord, RecordGenerator};

/// Restartable lap timer. Each `lap()` returns the seconds elapsed since the
/// previous lap (or construction) and restarts the clock, so consecutive
/// phases never overlap and never leave a gap.
pub struct PhaseTimer {
    last: Instant,
}

impl PhaseTimer {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn lap(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }
}

fn per_op_ns(seconds: f64, ops: usize) -> f64 {
    if ops == 0 {
        0.0
    } else {
        seconds / ops as f64 * 1e9
    }
}

/// Fill `records`, then run every registered converter over the whole
/// collection in order, reporting elapsed time, time per operation, and the
/// first formatted string as a smoke check.
///
/// `records` and `out` must be allocated by the caller up front so allocator
/// traffic stays out of the measured phases; both are overwritten in place.
pub fn run(
    generator: &mut RecordGenerator,
    records: &mut [DateTimeRecord],
    out: &mut [TimestampBuf],
) {
    let count = records.len();
    let mut timer = PhaseTimer::start();

    info!("generating {count} random datetime records...");
    generator.fill(records);
    let elapsed = timer.lap();
    info!(
        "done in {elapsed:.6} s ({:.1} ns per record)",
        per_op_ns(elapsed, count)
    );

    for (name, convert) in CONVERTERS {
        info!("converting with {name}...");
        for (record, buf) in records.iter().zip(out.iter_mut()) {
            convert(record, buf);
        }
        let elapsed = timer.lap();
        info!(
            "done in {elapsed:.6} s ({:.1} ns per conversion)",
            per_op_ns(elapsed, count)
        );
        if let Some(first) = out.first() {
            info!("first datetime is: {}", timestamp_str(first));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_restarts_the_clock() {
        let mut timer = PhaseTimer::start();
        let first = timer.lap();
        let second = timer.lap();
        assert!(first >= 0.0);
        // The second lap measures only its own interval, not the total.
        assert!(second < first + 1.0);
    }

    #[test]
    fn per_op_handles_zero_ops() {
        assert_eq!(per_op_ns(1.0, 0), 0.0);
        assert!((per_op_ns(1.0, 1_000_000_000) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn run_converts_every_record() {
        let mut generator = RecordGenerator::new(Some(3));
        let mut records = vec![DateTimeRecord::default(); 100];
        let mut out: Vec<TimestampBuf> = vec![[0u8; 20]; 100];
        run(&mut generator, &mut records, &mut out);

        // The last registered converter is zero-padded, so every buffer
        // should hold a full 19-char timestamp afterwards.
        for buf in &out {
            assert_eq!(timestamp_str(buf).len(), 19);
        }
    }
}
