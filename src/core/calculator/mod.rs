pub mod hours;
pub mod month;
pub mod week;
