pub mod calculator;
pub mod logic;
pub mod plan;
pub mod registry;
pub mod session;
