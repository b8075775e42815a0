pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod duration;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
mod render;
pub mod set;
pub mod summary;
