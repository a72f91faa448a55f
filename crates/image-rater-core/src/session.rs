use chrono::Utc;
use rand::Rng;
use tracing::{debug, warn};

use crate::corpus::ImageRef;

/// One rater's session: the presentation order frozen at creation, plus the
/// cursor into it. Never persisted; the host runtime keeps it alive between
/// interaction steps and a new process starts a new session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session_id: String,
    sequence: Vec<ImageRef>,
    cursor: usize,
}

impl SessionState {
    /// Start a fresh session over an already-shuffled presentation sequence.
    pub fn new(sequence: Vec<ImageRef>) -> Self {
        let session_id = generate_session_id();
        debug!(
            "session {} started with {} images",
            session_id,
            sequence.len()
        );
        Self {
            session_id,
            sequence,
            cursor: 0,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The image currently being rated, or None once every image is done.
    pub fn current(&self) -> Option<&ImageRef> {
        self.sequence.get(self.cursor)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    /// 0-based index of the current image.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Move to the next image. Returns false and stays put if the session is
    /// already complete, so the cursor can never run past the sequence.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            warn!("session {} advanced past its last image", self.session_id);
            return false;
        }
        self.cursor += 1;
        true
    }
}

/// Reuse an in-progress session untouched. Re-scanning the corpus must never
/// reshuffle or reset a session, so the freshly loaded images only matter
/// when no session exists yet.
pub fn init_or_resume(
    existing: Option<SessionState>,
    freshly_loaded_images: Vec<ImageRef>,
) -> SessionState {
    match existing {
        Some(state) => state,
        None => SessionState::new(freshly_loaded_images),
    }
}

/// Wall-clock seconds plus a 4-digit random suffix; unique enough for the
/// handful of raters a study ever runs at once.
fn generate_session_id() -> String {
    format!(
        "sess_{}_{}",
        Utc::now().timestamp(),
        rand::rng().random_range(1000..=9999)
    )
}
