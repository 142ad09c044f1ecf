use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tsbench::{CONVERTERS, DateTimeRecord, RecordGenerator, TIMESTAMP_LEN, TimestampBuf, timestamp_str};

fn padded_converters() -> Vec<(&'static str, tsbench::ConvertFn)> {
    CONVERTERS
        .iter()
        .filter(|(name, _)| !name.contains("no leading zeroes"))
        .copied()
        .collect()
}

#[test]
fn padded_converters_agree_on_random_records() {
    let mut generator = RecordGenerator::new(Some(2024));
    let mut records = vec![DateTimeRecord::default(); 2000];
    generator.fill(&mut records);

    let padded = padded_converters();
    assert_eq!(padded.len(), 5);

    for record in &records {
        let mut reference: TimestampBuf = [0; TIMESTAMP_LEN + 1];
        (padded[0].1)(record, &mut reference);
        for (name, convert) in &padded[1..] {
            let mut buf: TimestampBuf = [0; TIMESTAMP_LEN + 1];
            convert(record, &mut buf);
            assert_eq!(buf, reference, "{name} disagrees on {record:?}");
        }
    }
}

// chrono can only represent calendar-valid dates, so it serves as an oracle
// for the subset of generated records that happen to be valid.
#[test]
fn padded_output_matches_chrono_for_valid_dates() {
    let mut generator = RecordGenerator::new(Some(7));
    let mut records = vec![DateTimeRecord::default(); 2000];
    generator.fill(&mut records);

    let mut checked = 0;
    for record in &records {
        let Some(date) =
            NaiveDate::from_ymd_opt(record.year as i32, record.month as u32, record.day as u32)
        else {
            continue;
        };
        let datetime = date
            .and_hms_opt(record.hour as u32, record.minute as u32, record.second as u32)
            .unwrap();
        let expected = datetime.format("%Y-%m-%dT%H:%M:%S").to_string();

        for (name, convert) in padded_converters() {
            let mut buf: TimestampBuf = [0; TIMESTAMP_LEN + 1];
            convert(record, &mut buf);
            assert_eq!(timestamp_str(&buf), expected, "{name}");
        }
        checked += 1;
    }
    // Day 1..=31 against real month lengths: the vast majority are valid.
    assert!(checked > 1000);
}

#[test]
fn harness_runs_end_to_end_on_small_input() {
    let mut generator = RecordGenerator::new(Some(1));
    let mut records = vec![DateTimeRecord::default(); 10];
    let mut out: Vec<TimestampBuf> = vec![[0u8; TIMESTAMP_LEN + 1]; 10];
    tsbench::bench::run(&mut generator, &mut records, &mut out);

    for buf in &out {
        assert_eq!(timestamp_str(buf).len(), TIMESTAMP_LEN);
    }
}
