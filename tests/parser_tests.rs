use chrono::NaiveDate;
use opendota_picks::parser::{build_table, load_picks, parse_picks, InputLayout};
use opendota_picks::table::picks_by_date;
use opendota_picks::utils::ParseError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_load_picks_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"1":{{"1":5,"3":2}},"5":{{"1":1}}}}"#).unwrap();

    let raw = load_picks(file.path()).unwrap();

    assert_eq!(raw.key_count(), 2);
    assert_eq!(raw.cell_count(), 3);
}

#[test]
fn test_load_picks_missing_file() {
    let result = load_picks("/nonexistent/picks.json");
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_sample_matrix_picks_by_date() {
    let raw = parse_picks(r#"{"1":{"1":5,"3":2},"5":{"1":1}}"#).unwrap();
    let table = build_table(&raw, InputLayout::HeroFirst).unwrap();

    let series = picks_by_date(&table);

    assert_eq!(series.labels, vec!["1970-01-01", "1970-01-03"]);
    assert_eq!(series.values, vec![6, 2]);
}

#[test]
fn test_day_first_layout() {
    let raw = parse_picks(r#"{"15301":{"2":4,"1":1},"15302":{"2":1}}"#).unwrap();
    let table = build_table(&raw, InputLayout::DayFirst).unwrap();

    assert_eq!(table.dates, vec![date(2011, 11, 22), date(2011, 11, 23)]);
    assert_eq!(table.labels(), vec!["1", "2"]);
    assert_eq!(table.rows, vec![vec![1, 4], vec![0, 1]]);
}

#[test]
fn test_float_counts_are_truncated() {
    // pandas-style exports write counts as floats
    let raw = parse_picks(r#"{"1":{"1":5.0,"2":2.7},"2":{"1":null}}"#).unwrap();
    let table = build_table(&raw, InputLayout::HeroFirst).unwrap();

    assert_eq!(table.rows, vec![vec![5, 0], vec![2, 0]]);
}

#[test]
fn test_negative_count_rejected() {
    let raw = parse_picks(r#"{"1":{"1":-5}}"#).unwrap();
    let result = build_table(&raw, InputLayout::HeroFirst);

    assert!(matches!(
        result,
        Err(ParseError::InvalidCount { hero_id: 1, day_index: 1, .. })
    ));
}

#[test]
fn test_day_index_out_of_range() {
    let raw = parse_picks(r#"{"1":{"9223372036854775807":1}}"#).unwrap();
    let result = build_table(&raw, InputLayout::HeroFirst);

    assert!(matches!(result, Err(ParseError::DateOutOfRange(_))));
}

#[test]
fn test_empty_matrix() {
    let raw = parse_picks("{}").unwrap();
    let table = build_table(&raw, InputLayout::HeroFirst).unwrap();

    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.total_picks(), 0);
}

#[test]
fn test_total_past_u64_is_rejected() {
    let raw = parse_picks(r#"{"1":{"1":18446744073709551615},"2":{"1":1}}"#).unwrap();
    let result = build_table(&raw, InputLayout::HeroFirst);

    assert!(matches!(result, Err(ParseError::CountOverflow(_))));
}

#[test]
fn test_count_at_u64_max_is_kept() {
    let raw = parse_picks(r#"{"1":{"1":18446744073709551615},"2":{"1":0}}"#).unwrap();
    let table = build_table(&raw, InputLayout::HeroFirst).unwrap();

    assert_eq!(table.total_picks(), u64::MAX);
    assert_eq!(picks_by_date(&table).values, vec![u64::MAX]);
}

#[test]
fn test_float_count_past_u64_is_rejected() {
    let raw = parse_picks(r#"{"1":{"1":1e30}}"#).unwrap();
    let result = build_table(&raw, InputLayout::HeroFirst);

    assert!(matches!(
        result,
        Err(ParseError::InvalidCount { hero_id: 1, day_index: 1, .. })
    ));
}
