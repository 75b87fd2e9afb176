pub mod codes;
pub mod config;
pub mod export;
pub mod init;
pub mod month;
