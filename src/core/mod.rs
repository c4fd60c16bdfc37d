pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod del;
pub mod export;
pub mod log;
pub mod report;
