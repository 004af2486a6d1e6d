use std::time::{Duration, Instant};

use crate::app::session::Session;
use crate::domain::{AppError, share_text};
use crate::ports::{ClipboardWriter, Clock, NativeShare, ShareError};

/// How long the "copied" acknowledgment stays up.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Title passed to native share.
pub const SHARE_TITLE: &str = "A Bright Future Prediction";

/// Transient "copied" acknowledgment.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    visible_until: Option<Instant>,
}

impl CopyFeedback {
    pub fn show(&mut self, now: Instant) {
        self.visible_until = Some(now + COPY_FEEDBACK_DURATION);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Time left before the acknowledgment reverts.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.visible_until.map(|until| until.saturating_duration_since(now)).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.visible_until = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Copied,
}

/// Hands the share text to native share when present, otherwise to the clipboard.
pub struct ShareHelper<C: ClipboardWriter, K: Clock> {
    native: Option<Box<dyn NativeShare>>,
    clipboard: C,
    clock: K,
}

impl<C: ClipboardWriter, K: Clock> ShareHelper<C, K> {
    pub fn new(native: Option<Box<dyn NativeShare>>, clipboard: C, clock: K) -> Self {
        Self { native, clipboard, clock }
    }

    pub fn share(&mut self, session: &mut Session) -> Result<ShareOutcome, AppError> {
        let text = share_text(session.prediction(), session.explanation().text());

        if let Some(native) = self.native.as_mut() {
            match native.share(SHARE_TITLE, &text) {
                Ok(()) => return Ok(ShareOutcome::Shared),
                Err(ShareError::Cancelled) => {
                    tracing::debug!("share cancelled by user");
                    return Ok(ShareOutcome::Cancelled);
                }
                Err(ShareError::Failed(reason)) => {
                    tracing::warn!(%reason, "native share failed, copying to clipboard");
                }
            }
        }

        self.clipboard.write_text(&text)?;
        session.copy_feedback_mut().show(self.clock.now());
        Ok(ShareOutcome::Copied)
    }

    pub fn copy_feedback_visible(&self, session: &Session) -> bool {
        session.copy_feedback().is_visible(self.clock.now())
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
