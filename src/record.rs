use std::fmt;

use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

/// One date/time sample with each field stored as a plain unsigned integer.
///
/// Fields are drawn independently, so calendar-invalid combinations such as
/// February 31st can and do occur. The benchmark only exercises textual
/// formatting, never calendar arithmetic, so no day-in-month validation is
/// performed anywhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRecord {
    /// 0..=9999
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31, not checked against month/year
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

impl fmt::Display for DateTimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Uniform random source for [`DateTimeRecord`]s.
///
/// Owns its RNG and one pre-built distribution per field instead of reaching
/// for process-global generator state, so callers control seeding and the
/// sampling cost per record is just six draws.
pub struct RecordGenerator {
    rng: StdRng,
    years: Uniform<u16>,
    months: Uniform<u8>,
    days: Uniform<u8>,
    hours: Uniform<u8>,
    minutes: Uniform<u8>,
    seconds: Uniform<u8>,
}

impl RecordGenerator {
    /// Create a generator seeded from OS entropy, or from `seed` for a
    /// reproducible run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            // Ranges are compile-time constants, construction cannot fail.
            years: Uniform::new_inclusive(0u16, 9999).expect("valid year range"),
            months: Uniform::new_inclusive(1u8, 12).expect("valid month range"),
            days: Uniform::new_inclusive(1u8, 31).expect("valid day range"),
            hours: Uniform::new_inclusive(0u8, 23).expect("valid hour range"),
            minutes: Uniform::new_inclusive(0u8, 59).expect("valid minute range"),
            seconds: Uniform::new_inclusive(0u8, 59).expect("valid second range"),
        }
    }

    /// Draw one record with every field sampled independently.
    pub fn next_record(&mut self) -> DateTimeRecord {
        DateTimeRecord {
            year: self.years.sample(&mut self.rng),
            month: self.months.sample(&mut self.rng),
            day: self.days.sample(&mut self.rng),
            hour: self.hours.sample(&mut self.rng),
            minute: self.minutes.sample(&mut self.rng),
            second: self.seconds.sample(&mut self.rng),
        }
    }

    /// Overwrite every slot in `records` with a fresh sample.
    pub fn fill(&mut self, records: &mut [DateTimeRecord]) {
        for record in records.iter_mut() {
            *record = self.next_record();
        }
    }
}
