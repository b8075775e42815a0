pub mod calendar;
pub mod category;
pub mod civil;
pub mod day_key;
pub mod event;
pub mod instant;
pub mod month_key;
pub mod summary;
pub mod zone;
