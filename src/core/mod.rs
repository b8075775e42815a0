pub mod add;
pub mod backup;
pub mod calculator;
pub mod calendar;
pub mod classifier;
pub mod config;
pub mod del;
pub mod log;
pub mod logic;
pub mod schedule;
pub mod time_converter;
