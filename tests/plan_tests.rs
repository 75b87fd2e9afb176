mod common;
use common::{assert_close, d, session};
use shiftcal::config::Config;
use shiftcal::core::logic::Core;
use shiftcal::core::plan::{Plan, RawValue, parse_assignment};
use shiftcal::errors::AppError;
use std::fs;

const PLAN: &str = r#"
year: 2025
month: 3
codes:
  - code: X8
    start: "08:00"
    end: "16:30"
    break_minutes: 30
    label: Dag 8u
days:
  - date: 2025-03-03
    code: vv7.6
    overtime_minutes: 15
  - date: 04-03-2025
    code: bijs
    manual_hours: "6,5"
    notes: cursus
  - date: 2025-03-05
    code: x8
    manual_hours: veel
    overtime_minutes: "-30"
"#;

#[test]
fn test_yaml_plan_parses() {
    let plan = Plan::from_yaml(PLAN).unwrap();
    assert_eq!(plan.year, Some(2025));
    assert_eq!(plan.month, Some(3));
    assert_eq!(plan.codes.len(), 1);
    assert_eq!(plan.days.len(), 3);
    assert_eq!(plan.days[0].overtime_minutes, Some(RawValue::Int(15)));
}

#[test]
fn test_yaml_plan_applies_with_coercion() {
    let plan = Plan::from_yaml(PLAN).unwrap();
    let mut s = session(2025, 3);
    assert_eq!(plan.apply(&mut s).unwrap(), 3);

    let days = s.computed_days();
    let by_day = |day: u32| days.iter().find(|c| c.date() == d(2025, 3, day)).unwrap();

    assert_close(by_day(3).total_hours, 7.85);
    assert_close(by_day(4).shift_hours, 6.5);
    assert_eq!(by_day(4).record.notes(), "cursus");
    assert_eq!(by_day(5).record.manual_hours(), 0.0);
    assert_close(by_day(5).total_hours, 7.5);
    assert!(s.summary().unknown_codes.is_empty());
}

#[test]
fn test_plan_date_outside_month_fails() {
    let plan = Plan::from_yaml("days:\n  - date: 2025-04-01\n    code: vv6\n").unwrap();
    let mut s = session(2025, 3);
    assert!(matches!(
        plan.apply(&mut s),
        Err(AppError::DateOutOfMonth { .. })
    ));
}

#[test]
fn test_malformed_plan_is_a_plan_error() {
    assert!(matches!(
        Plan::from_yaml("days: 12"),
        Err(AppError::Plan(_))
    ));
}

#[test]
fn test_parse_assignment() {
    let (date, code) = parse_assignment("2025-03-04=VV7.6").unwrap();
    assert_eq!(date, d(2025, 3, 4));
    assert_eq!(code, "VV7.6");
    assert!(parse_assignment("2025-03-04").is_err());
    assert!(parse_assignment("gisteren=vv6").is_err());
}

#[test]
fn test_build_session_prefers_cli_over_plan() {
    let path = std::env::temp_dir().join("build_session_plan_shiftcal.yaml");
    fs::write(&path, PLAN).unwrap();
    let cfg = Config::default();

    let s = Core::build_session(&cfg, None, None, Some(path.as_path()), &["2025-03-06=ln6".into()]).unwrap();
    assert_eq!(s.month_key(), "2025-03");
    assert_eq!(s.day(d(2025, 3, 6)).unwrap().code(), Some("ln6"));
    assert_eq!(s.day(d(2025, 3, 3)).unwrap().code(), Some("vv7.6"));

    // plan days belong to March, so another month cannot take them
    assert!(Core::build_session(&cfg, Some(2025), Some(4), Some(path.as_path()), &[]).is_err());

    let s = Core::build_session(&cfg, Some(2025), Some(2), None, &[]).unwrap();
    assert_eq!(s.days().len(), 28);
}

#[test]
fn test_build_session_uses_config_codes_and_wrap_flag() {
    let mut cfg = Config::default();
    cfg.full_day_wrap = false;
    cfg.codes.push(shiftcal::config::CodeEntry {
        code: "etmaal".into(),
        start: Some("09:00".into()),
        end: Some("09:00".into()),
        break_minutes: 0,
        label: String::new(),
    });

    let s = Core::build_session(&cfg, Some(2025), Some(3), None, &["2025-03-03=etmaal".into()])
        .unwrap();
    assert_eq!(s.day_hours(d(2025, 3, 3)), Some(0.0));
    assert!(s.summary().unknown_codes.is_empty());
}
