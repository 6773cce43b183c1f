use rand::Rng;

use crate::commands::{CmdResult, Event};
use crate::error::Result;
use crate::library::VideoLibrary;
use crate::playback::{Playback, Transition};

pub fn play(library: &VideoLibrary, playback: &mut Playback, id: &str) -> Result<CmdResult> {
    let transition = playback.play(library, id)?;
    Ok(transition_result(transition))
}

pub fn play_random<R: Rng>(
    library: &VideoLibrary,
    playback: &mut Playback,
    rng: &mut R,
) -> Result<CmdResult> {
    let transition = playback.play_random(library, rng)?;
    Ok(transition_result(transition))
}

pub fn stop(library: &VideoLibrary, playback: &mut Playback) -> Result<CmdResult> {
    let video = playback.stop(library)?;
    Ok(CmdResult::default().with_event(Event::Stopped { title: video.title }))
}

pub fn pause(library: &VideoLibrary, playback: &mut Playback) -> Result<CmdResult> {
    let video = playback.pause(library)?;
    Ok(CmdResult::default().with_event(Event::Paused { title: video.title }))
}

pub fn resume(library: &VideoLibrary, playback: &mut Playback) -> Result<CmdResult> {
    let video = playback.resume(library)?;
    Ok(CmdResult::default().with_event(Event::Resumed { title: video.title }))
}

pub fn now_playing(library: &VideoLibrary, playback: &Playback) -> Result<CmdResult> {
    Ok(CmdResult::default().with_now_playing(playback.status(library)))
}

pub(crate) fn transition_result(transition: Transition) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(stopped) = transition.stopped {
        result.add_event(Event::Stopped {
            title: stopped.title,
        });
    }
    result.add_event(Event::Started {
        title: transition.started.title,
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VidzError;

    #[test]
    fn play_over_play_reports_both_events() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();
        play(&library, &mut playback, "amazing_cats_video_id").unwrap();

        let result = play(&library, &mut playback, "funny_dogs_video_id").unwrap();
        assert_eq!(
            result.events,
            vec![
                Event::Stopped {
                    title: "Amazing Cats".to_string()
                },
                Event::Started {
                    title: "Funny Dogs".to_string()
                },
            ]
        );
    }

    #[test]
    fn pause_resume_round_trip() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();
        play(&library, &mut playback, "amazing_cats_video_id").unwrap();

        let result = pause(&library, &mut playback).unwrap();
        assert_eq!(
            result.events,
            vec![Event::Paused {
                title: "Amazing Cats".to_string()
            }]
        );
        assert!(now_playing(&library, &playback)
            .unwrap()
            .now_playing
            .unwrap()
            .paused);

        let result = resume(&library, &mut playback).unwrap();
        assert_eq!(
            result.events,
            vec![Event::Resumed {
                title: "Amazing Cats".to_string()
            }]
        );
    }

    #[test]
    fn now_playing_is_empty_when_stopped() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();

        assert!(now_playing(&library, &playback)
            .unwrap()
            .now_playing
            .is_none());
        assert!(matches!(
            stop(&library, &mut playback),
            Err(VidzError::NothingPlaying)
        ));
    }
}
