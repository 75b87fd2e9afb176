use shiftcal::utils::formatting::{display_width, pad_right};
use shiftcal::utils::table::{Cell, Table};

fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::plain(*c)).collect()
}

#[test]
fn test_wide_characters_keep_columns_aligned() {
    let mut t = Table::new(&["C", "D", "E"]);
    t.add_row(row(&["日本", "a", "|"]));
    t.add_row(row(&["ab", "a", "|"]));

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "C    D E ");
    assert_eq!(lines[1], "日本 a | ");
    assert_eq!(lines[2], "ab   a | ");

    let col_of_bar = |l: &str| display_width(&l[..l.find('|').unwrap()]);
    assert_eq!(col_of_bar(lines[1]), col_of_bar(lines[2]));
}

#[test]
fn test_color_codes_do_not_count_towards_width() {
    let mut t = Table::new(&["Code", "Uren"]);
    t.add_row(vec![Cell::colored("vv7.6", "\x1b[32m"), Cell::plain("7.60")]);
    t.add_row(row(&["x", "0.00"]));

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "\x1b[32mvv7.6\x1b[0m 7.60 ");
    assert_eq!(lines[2], "x     0.00 ");
}

#[test]
fn test_pad_right_uses_display_width() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(pad_right("日本", 6), "日本  ");
    assert_eq!(pad_right("ab", 6), "ab    ");
    assert_eq!(pad_right("toolong", 3), "toolong");
}
