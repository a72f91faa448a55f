mod csv_log;
mod models;

pub use csv_log::RatingLog;
pub use models::RatingRecord;
