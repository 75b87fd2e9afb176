pub mod day_record;
pub mod day_summary;
pub mod shift_code;

pub use day_record::DayRecord;
pub use day_summary::{ComputedDay, MonthSummary, WeekSummary};
pub use shift_code::{ShiftCode, ShiftKind};
