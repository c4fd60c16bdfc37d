pub mod entry;
pub mod unit;
