use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::corpus;
use crate::error::Error;
use crate::likert::LikertScore;
use crate::session::{self, SessionState};
use crate::storage::{RatingLog, RatingRecord};

/// ISO-8601 UTC with microseconds and no offset suffix, the format the
/// study's analysis tooling already parses.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// What the host UI should do after an accepted submission. The engine never
/// drives the display itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    /// Re-render with the session's new current image.
    Rerender,
    /// Every image has been rated; show the completion screen.
    Complete,
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub record: RatingRecord,
    pub action: RenderAction,
}

/// Drives one rating study: corpus scan, session setup, submissions. The
/// host UI owns the interaction loop and calls back in after each render.
pub struct StudyEngine {
    config: AppConfig,
    log: RatingLog,
}

impl StudyEngine {
    pub fn new(config: AppConfig) -> Self {
        let log = RatingLog::new(&config.results_path);
        Self { config, log }
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log = RatingLog::new(path);
        self
    }

    pub fn log(&self) -> &RatingLog {
        &self.log
    }

    /// Scan the corpus and hand back the session to present. An in-progress
    /// session is returned verbatim, untouched by the re-scan. A corpus with
    /// no matching images is rejected before any session exists, so the
    /// rating flow never starts over nothing.
    pub fn start_session(
        &self,
        existing: Option<SessionState>,
        seed: Option<u64>,
    ) -> Result<SessionState, Error> {
        let root = Path::new(&self.config.image_dir);
        let images = match seed {
            Some(seed) => corpus::list_images_seeded(root, seed)?,
            None => corpus::list_images(root)?,
        };

        if images.is_empty() && existing.is_none() {
            return Err(Error::EmptyCorpus {
                dir: root.to_path_buf(),
            });
        }

        info!("{} images queued for rating", images.len());
        Ok(session::init_or_resume(existing, images))
    }

    /// Record both scores for the current image, then advance. The append is
    /// a precondition for the advance: a storage failure leaves the cursor
    /// on the same image so the rater can simply retry, and no rating is
    /// ever lost silently.
    pub fn submit(
        &self,
        state: &mut SessionState,
        random_score: LikertScore,
        organized_score: LikertScore,
    ) -> Result<SubmitOutcome, Error> {
        let image = state.current().ok_or(Error::SessionExhausted)?;

        let record = RatingRecord {
            timestamp_utc: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            session_id: state.session_id().to_string(),
            image_name: image.name.clone(),
            random_score: random_score.value(),
            organized_score: organized_score.value(),
        };

        self.log.append(&record)?;
        state.advance();

        let action = if state.is_complete() {
            RenderAction::Complete
        } else {
            RenderAction::Rerender
        };
        debug!(
            "rating {}/{} recorded for session {}",
            state.position(),
            state.len(),
            state.session_id()
        );

        Ok(SubmitOutcome { record, action })
    }
}
