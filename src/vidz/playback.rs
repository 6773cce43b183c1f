//! The playback controller: at most one current video and a paused bit.
//!
//! Two behaviors are deliberately one rule here instead of checks spread
//! over call sites: starting a new video implicitly stops the current one
//! ([`Playback::play`]), and flagging the current video forces it out
//! ([`Playback::eject`]). A flagged video can never remain the current
//! playback target.

use rand::Rng;

use crate::error::{Result, VidzError};
use crate::library::VideoLibrary;
use crate::model::{NowPlaying, Video};

/// Outcome of successfully starting a video: what was implicitly stopped,
/// if anything, and what is now playing.
#[derive(Debug, Clone)]
pub struct Transition {
    pub stopped: Option<Video>,
    pub started: Video,
}

#[derive(Debug, Default)]
pub struct Playback {
    current: Option<String>,
    paused: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, library: &VideoLibrary, id: &str) -> Result<Transition> {
        let video = library
            .get(id)
            .ok_or_else(|| VidzError::VideoNotFound(id.to_string()))?;
        if let Some(reason) = &video.flag {
            return Err(VidzError::Flagged(reason.clone()));
        }
        let started = video.clone();
        let stopped = self.take_current(library);
        self.current = Some(started.id.clone());
        self.paused = false;
        Ok(Transition { stopped, started })
    }

    /// Plays a uniformly random unflagged video.
    pub fn play_random<R: Rng>(&mut self, library: &VideoLibrary, rng: &mut R) -> Result<Transition> {
        let candidates = library.unflagged();
        if candidates.is_empty() {
            return Err(VidzError::NothingAvailable);
        }
        let id = candidates[rng.gen_range(0..candidates.len())].id.clone();
        self.play(library, &id)
    }

    pub fn stop(&mut self, library: &VideoLibrary) -> Result<Video> {
        self.take_current(library).ok_or(VidzError::NothingPlaying)
    }

    pub fn pause(&mut self, library: &VideoLibrary) -> Result<Video> {
        let video = self
            .current_video(library)
            .ok_or(VidzError::NothingPlaying)?;
        if self.paused {
            return Err(VidzError::AlreadyPaused(video.title));
        }
        self.paused = true;
        Ok(video)
    }

    pub fn resume(&mut self, library: &VideoLibrary) -> Result<Video> {
        let video = self
            .current_video(library)
            .ok_or(VidzError::NothingPlaying)?;
        if !self.paused {
            return Err(VidzError::NotPaused);
        }
        self.paused = false;
        Ok(video)
    }

    pub fn status(&self, library: &VideoLibrary) -> Option<NowPlaying> {
        self.current_video(library).map(|video| NowPlaying {
            video,
            paused: self.paused,
        })
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Forces the given video out of playback if it is the current target,
    /// returning it. Moderation calls this when a flag lands.
    pub fn eject(&mut self, library: &VideoLibrary, id: &str) -> Option<Video> {
        if self.current.as_deref() == Some(id) {
            self.take_current(library)
        } else {
            None
        }
    }

    fn current_video(&self, library: &VideoLibrary) -> Option<Video> {
        self.current.as_ref().and_then(|id| library.get(id)).cloned()
    }

    fn take_current(&mut self, library: &VideoLibrary) -> Option<Video> {
        let stopped = self.current_video(library);
        self.current = None;
        self.paused = false;
        stopped
    }
}
