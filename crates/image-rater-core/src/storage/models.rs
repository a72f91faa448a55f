use serde::{Deserialize, Serialize};

/// One accepted submission, exactly as it appears as a row in the rating
/// log. Field order is the CSV column order and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// ISO-8601 UTC capture time, no offset suffix.
    pub timestamp_utc: String,
    pub session_id: String,
    /// Base filename of the rated image, no directory components.
    pub image_name: String,
    pub random_score: u8,
    pub organized_score: u8,
}
