pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod likert;
pub mod session;
pub mod storage;

pub use config::AppConfig;
pub use corpus::ImageRef;
pub use engine::{RenderAction, StudyEngine, SubmitOutcome};
pub use error::Error;
pub use likert::LikertScore;
pub use session::SessionState;
pub use storage::{RatingLog, RatingRecord};
