//! Moderation: flagging and unflagging catalog entries. Flagging the
//! current playback target forces the implicit stop through
//! [`Playback::eject`]; nothing else ever does.

use crate::commands::{CmdResult, Event};
use crate::error::{Result, VidzError};
use crate::library::VideoLibrary;
use crate::playback::Playback;

const DEFAULT_REASON: &str = "Not supplied";

pub fn flag(
    library: &mut VideoLibrary,
    playback: &mut Playback,
    id: &str,
    reason: Option<&str>,
) -> Result<CmdResult> {
    let video = library
        .get(id)
        .ok_or_else(|| VidzError::VideoNotFound(id.to_string()))?;
    if video.is_flagged() {
        return Err(VidzError::AlreadyFlagged);
    }
    let title = video.title.clone();
    let reason = reason.unwrap_or(DEFAULT_REASON).to_string();

    let mut result = CmdResult::default();
    if let Some(stopped) = playback.eject(library, id) {
        result.add_event(Event::Stopped {
            title: stopped.title,
        });
    }
    library.set_flag(id, &reason);
    result.add_event(Event::Flagged { title, reason });
    Ok(result)
}

pub fn allow(library: &mut VideoLibrary, id: &str) -> Result<CmdResult> {
    let video = library
        .get(id)
        .ok_or_else(|| VidzError::VideoNotFound(id.to_string()))?;
    if !video.is_flagged() {
        return Err(VidzError::NotFlagged);
    }
    let title = video.title.clone();
    library.clear_flag(id);
    Ok(CmdResult::default().with_event(Event::FlagCleared { title }))
}
