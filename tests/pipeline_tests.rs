use opendota_picks::commands::{execute_convert, ConvertArgs, HeroLabels, HeroSource, ReportKind};
use opendota_picks::parser::InputLayout;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_PICKS: &str = r#"{"1":{"1":5,"3":2},"5":{"1":1}}"#;

const SAMPLE_HEROES: &str = r#"[
    {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage"},
    {"id": 5, "name": "npc_dota_hero_crystal_maiden", "localized_name": "Crystal Maiden"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(picks: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("picks.json"), picks).unwrap();
        fs::write(dir.path().join("heroes.json"), SAMPLE_HEROES).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self) -> ConvertArgs {
        ConvertArgs {
            input: self.path("picks.json"),
            output: self.path("out.csv"),
            heroes_source: HeroSource::File(self.path("heroes.json")),
            ..Default::default()
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_picks_by_date_end_to_end() {
    let fixture = Fixture::new(SAMPLE_PICKS);
    let args = ConvertArgs {
        picks_by_date: true,
        ..fixture.args()
    };

    let summary = execute_convert(args).unwrap();

    assert_eq!(summary.kind, ReportKind::PicksByDate);
    assert_eq!(summary.rows_written, 2);
    assert_eq!(
        read(&fixture.path("out.csv")),
        "date,picks\n1970-01-01,6\n1970-01-03,2\n"
    );
}

#[test]
fn test_picks_by_date_never_loads_heroes() {
    let fixture = Fixture::new(SAMPLE_PICKS);
    let args = ConvertArgs {
        picks_by_date: true,
        heroes_source: HeroSource::File(fixture.path("missing.json")),
        ..fixture.args()
    };

    assert!(execute_convert(args).is_ok());
}

#[test]
fn test_default_table_with_names() {
    let fixture = Fixture::new(SAMPLE_PICKS);

    execute_convert(fixture.args()).unwrap();

    assert_eq!(
        read(&fixture.path("out.csv")),
        "date,Anti-Mage,Crystal Maiden\n1970-01-01,5,1\n1970-01-03,2,0\n"
    );
}

#[test]
fn test_default_table_with_numbers() {
    let fixture = Fixture::new(SAMPLE_PICKS);
    let args = ConvertArgs {
        heroes: HeroLabels::Numbers,
        heroes_source: HeroSource::File(fixture.path("missing.json")),
        ..fixture.args()
    };

    execute_convert(args).unwrap();

    assert_eq!(
        read(&fixture.path("out.csv")),
        "date,1,5\n1970-01-01,5,1\n1970-01-03,2,0\n"
    );
}

#[test]
fn test_picks_by_hero_with_names() {
    let fixture = Fixture::new(SAMPLE_PICKS);
    let args = ConvertArgs {
        picks_by_hero: true,
        ..fixture.args()
    };

    let summary = execute_convert(args).unwrap();

    assert_eq!(summary.total_picks, 8);
    assert_eq!(
        read(&fixture.path("out.csv")),
        "hero,picks\nAnti-Mage,7\nCrystal Maiden,1\n"
    );
}

#[test]
fn test_normalized_table() {
    let fixture = Fixture::new(r#"{"1":{"15301":3,"15302":0},"2":{"15301":1}}"#);
    let args = ConvertArgs {
        heroes: HeroLabels::Numbers,
        normalize: true,
        ..fixture.args()
    };

    execute_convert(args).unwrap();

    assert_eq!(
        read(&fixture.path("out.csv")),
        "date,1,2\n2011-11-22,0.75,0.25\n2011-11-23,0,0\n"
    );
}

#[test]
fn test_remove_low_counts() {
    // Day 15300 is 2011-11-21, day 15301 is 2011-11-22
    let fixture = Fixture::new(r#"{"1":{"15300":4,"15301":2,"16000":1}}"#);
    let args = ConvertArgs {
        heroes: HeroLabels::Numbers,
        remove_low_counts: true,
        ..fixture.args()
    };

    let summary = execute_convert(args).unwrap();

    assert_eq!(summary.dates, 2);
    assert_eq!(
        read(&fixture.path("out.csv")),
        "date,1\n2011-11-22,2\n2013-10-21,1\n"
    );
}

#[test]
fn test_sentinels_never_reach_output() {
    let fixture = Fixture::new(r#"{"0":{"1":100},"1":{"0":100,"2":3}}"#);
    let args = ConvertArgs {
        heroes: HeroLabels::Numbers,
        ..fixture.args()
    };

    execute_convert(args).unwrap();

    assert_eq!(read(&fixture.path("out.csv")), "date,1\n1970-01-01,0\n1970-01-02,3\n");
}

#[test]
fn test_day_first_layout_matches_hero_first() {
    let hero_first = Fixture::new(SAMPLE_PICKS);
    let day_first = Fixture::new(r#"{"1":{"1":5,"5":1},"3":{"1":2}}"#);

    execute_convert(hero_first.args()).unwrap();
    execute_convert(ConvertArgs {
        input_layout: InputLayout::DayFirst,
        ..day_first.args()
    })
    .unwrap();

    assert_eq!(
        read(&hero_first.path("out.csv")),
        read(&day_first.path("out.csv"))
    );
}

#[test]
fn test_unknown_hero_writes_nothing() {
    let fixture = Fixture::new(r#"{"1":{"1":5},"99":{"1":1}}"#);

    let result = execute_convert(fixture.args());

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("99"), "unexpected error: {}", message);
    assert!(!fixture.path("out.csv").exists());
}

#[test]
fn test_malformed_json_writes_nothing() {
    let fixture = Fixture::new(r#"{"1":{"1":5"#);

    assert!(execute_convert(fixture.args()).is_err());
    assert!(!fixture.path("out.csv").exists());
}

#[test]
fn test_output_parent_directories_created() {
    let fixture = Fixture::new(SAMPLE_PICKS);
    let output = fixture.path("reports/2024/picks.csv");
    let args = ConvertArgs {
        output: output.clone(),
        picks_by_date: true,
        ..fixture.args()
    };

    execute_convert(args).unwrap();

    assert!(output.exists());
}

#[test]
fn test_overflowing_counts_write_nothing() {
    for picks in [
        r#"{"1":{"1":18446744073709551615},"2":{"1":1}}"#,
        r#"{"1":{"1":1e30}}"#,
    ] {
        let fixture = Fixture::new(picks);
        let args = ConvertArgs {
            heroes: HeroLabels::Numbers,
            ..fixture.args()
        };

        assert!(execute_convert(args).is_err(), "accepted {}", picks);
        assert!(!fixture.path("out.csv").exists());
    }
}
