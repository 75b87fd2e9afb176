use crate::cli::parser::{Commands, MonthArgs};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::day_summary::{ComputedDay, MonthSummary, WeekSummary};
use crate::ui::messages::{header, metric, warning};
use crate::utils::colors::{color_for_code, color_for_hours};
use crate::utils::date::fmt_date;
use crate::utils::formatting::{bold, fmt_hours, fmt_hours_unit, fmt_signed_minutes};
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, no_weeks } = cmd {
        let session = build(month, cfg)?;
        let days = session.computed_days();
        let sep = cfg.separator_char.as_str();

        header(
            format!("🗓️  Maandoverzicht {}", session.month_key()),
            sep,
        );
        print!("{}", render_days(&days).render());

        if !*no_weeks {
            header("🗂️  Overzicht per week", sep);
            for week in session.weeks() {
                print_week(&week);
            }
        }

        header("📊 Samenvatting maand", sep);
        print_summary(&session.summary());
    }
    Ok(())
}

pub(crate) fn build(args: &MonthArgs, cfg: &Config) -> AppResult<Session> {
    Core::build_session(
        cfg,
        args.year,
        args.month,
        args.plan.as_deref(),
        &args.set,
    )
}

fn render_days(days: &[ComputedDay]) -> Table {
    let mut table = Table::new(&[
        "Datum",
        "Dag",
        "Code",
        "ShiftUren",
        "BIJSuren",
        "OverurenMin",
        "TotaalUren",
        "Week",
        "Notities",
    ]);

    for d in days {
        let code = d.record.code().unwrap_or_default();
        table.add_row(vec![
            Cell::plain(fmt_date(d.date())),
            Cell::plain(d.record.day_name()),
            Cell::colored(code, color_for_code(code, !d.unknown_code)),
            Cell::plain(fmt_hours(d.shift_hours)),
            Cell::plain(fmt_hours(d.record.manual_hours())),
            Cell::plain(fmt_signed_minutes(d.record.overtime_minutes())),
            Cell::colored(fmt_hours(d.total_hours), color_for_hours(d.total_hours)),
            Cell::plain(d.iso_week.to_string()),
            Cell::plain(d.record.notes()),
        ]);
    }

    table
}

fn print_week(week: &WeekSummary) {
    println!(
        "\n{}",
        bold(&format!(
            "Week {} ({} – {})",
            week.iso_week,
            fmt_date(week.start),
            fmt_date(week.end)
        ))
    );
    print!("{}", render_days(&week.days).render());
    println!(
        "Totaal Week {}: {}",
        week.iso_week,
        fmt_hours_unit(week.total_hours)
    );
}

fn print_summary(summary: &MonthSummary) {
    metric("Maandtotaal (uren)", fmt_hours(summary.total_hours));
    metric(
        "Gem. per gewerkte dag",
        fmt_hours(summary.average_per_worked_day),
    );
    metric("Aantal gewerkte dagen", summary.worked_day_count);

    if !summary.unknown_codes.is_empty() {
        warning(format!(
            "Onbekende codes aangetroffen: {}. Voeg ze toe met `shiftcal codes --add`.",
            summary.unknown_codes.join(", ")
        ));
    }
}
