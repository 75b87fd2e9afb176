use crate::config::Config;
use crate::core::calculator::hours::HoursOptions;
use crate::core::plan::{Plan, parse_assignment};
use crate::core::registry::ShiftCodeRegistry;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::date;
use chrono::Datelike;
use std::path::Path;

pub struct Core;

impl Core {
    /// Build the session a command works on.
    ///
    /// The month comes from the command line, then from the plan file, then
    /// from today. Plan edits are applied before the `DATE=CODE` overrides.
    pub fn build_session(
        cfg: &Config,
        year: Option<i32>,
        month: Option<u32>,
        plan: Option<&Path>,
        assignments: &[String],
    ) -> AppResult<Session> {
        let plan = plan.map(Plan::load).transpose()?;
        let today = date::today();

        let year = year
            .or_else(|| plan.as_ref().and_then(|p| p.year))
            .unwrap_or(today.year());
        let month = month
            .or_else(|| plan.as_ref().and_then(|p| p.month))
            .unwrap_or(today.month());

        let registry = ShiftCodeRegistry::from_config(cfg)?;
        let mut session = Session::new(year, month, registry)?.with_options(HoursOptions {
            full_day_wrap: cfg.full_day_wrap,
        });

        if let Some(plan) = &plan {
            plan.apply(&mut session)?;
        }

        for a in assignments {
            let (d, code) = parse_assignment(a)?;
            session.assign_code(d, &code)?;
        }

        Ok(session)
    }
}
