use shiftcal::config::{CodeEntry, Config};
use shiftcal::core::registry::ShiftCodeRegistry;
use shiftcal::errors::AppError;
use shiftcal::models::ShiftKind;

#[test]
fn test_seed_table_is_complete_and_ordered() {
    let reg = ShiftCodeRegistry::default();
    let codes: Vec<&str> = reg.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(
        codes,
        [
            "v4.5", "vv6", "vv7.6", "ll7.6", "ll6.25", "ll3,8", "ln7,6", "ln6", "n10", "bijs",
            "fdrecup"
        ]
    );
}

#[test]
fn test_seed_kinds() {
    let reg = ShiftCodeRegistry::default();
    assert!(reg.lookup("bijs").unwrap().kind.is_manual());
    assert_eq!(reg.lookup("fdrecup").unwrap().kind, ShiftKind::ZeroDuration);

    let vv = reg.lookup("vv7.6").unwrap();
    assert_eq!(vv.break_minutes, 30);
    assert_eq!(vv.start().unwrap().to_string(), "06:45:00");
    assert_eq!(vv.end().unwrap().to_string(), "14:51:00");
}

#[test]
fn test_lookup_is_case_insensitive_and_trimmed() {
    let reg = ShiftCodeRegistry::default();
    assert_eq!(reg.lookup("  VV7.6 ").unwrap().code, "vv7.6");
    assert!(reg.lookup("N10").is_some());
    assert!(reg.lookup("xx").is_none());
    assert!(reg.lookup("").is_none());
}

#[test]
fn test_describe_timed_and_untimed() {
    let reg = ShiftCodeRegistry::default();
    assert_eq!(
        reg.describe("vv7.6").unwrap(),
        "Vroege shift 7,6u • 06:45–14:51 • pauze 30m"
    );
    assert_eq!(
        reg.describe("bijs").unwrap(),
        "Bijscholing (uren invullen) • variabel / 0u"
    );
    assert!(reg.describe("nope").is_none());
}

#[test]
fn test_upsert_adds_and_overwrites() {
    let mut reg = ShiftCodeRegistry::default();
    let before = reg.len();

    reg.upsert(" X8 ", "08:00", "16:30", 30, "Dag 8u").unwrap();
    assert_eq!(reg.len(), before + 1);
    assert_eq!(reg.lookup("x8").unwrap().label, "Dag 8u");

    // last write wins, position kept
    reg.upsert("v4.5", "08:00", "12:30", 0, "").unwrap();
    assert_eq!(reg.len(), before + 1);
    let v = reg.lookup("v4.5").unwrap();
    assert_eq!(v.label, "v4.5");
    assert_eq!(reg.iter().next().unwrap().code, "v4.5");
    assert_eq!(v.describe(), "v4.5 • 08:00–12:30 • pauze 0m");
}

#[test]
fn test_upsert_without_times() {
    let mut reg = ShiftCodeRegistry::default();
    reg.upsert("verlof", "", "", 0, "Verlof").unwrap();
    assert_eq!(reg.lookup("verlof").unwrap().kind, ShiftKind::ZeroDuration);
}

#[test]
fn test_upsert_rejects_malformed_and_stores_nothing() {
    let mut reg = ShiftCodeRegistry::default();
    let before = reg.len();

    assert!(matches!(
        reg.upsert("bad", "25:00", "10:00", 0, ""),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        reg.upsert("half", "08:00", "", 0, ""),
        Err(AppError::InvalidShiftCode { .. })
    ));
    assert!(matches!(
        reg.upsert("   ", "08:00", "10:00", 0, ""),
        Err(AppError::InvalidShiftCode { .. })
    ));

    assert_eq!(reg.len(), before);
    assert!(reg.lookup("bad").is_none());
    assert!(reg.lookup("half").is_none());
}

#[test]
fn test_manual_code_is_configurable() {
    let mut cfg = Config::default();
    cfg.manual_hours_code = "opl".into();
    cfg.codes.push(CodeEntry {
        code: "OPL".into(),
        start: None,
        end: None,
        break_minutes: 0,
        label: "Opleiding".into(),
    });

    let reg = ShiftCodeRegistry::from_config(&cfg).unwrap();
    assert!(reg.lookup("opl").unwrap().kind.is_manual());
    assert_eq!(reg.lookup("bijs").unwrap().kind, ShiftKind::ZeroDuration);
}

#[test]
fn test_from_config_rejects_invalid_entry() {
    let mut cfg = Config::default();
    cfg.codes.push(CodeEntry {
        code: "oops".into(),
        start: Some("8h".into()),
        end: Some("16:00".into()),
        break_minutes: 0,
        label: String::new(),
    });
    assert!(ShiftCodeRegistry::from_config(&cfg).is_err());
}
