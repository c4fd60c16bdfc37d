pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod show;
