//! # API Facade
//!
//! The single entry point for all vidz operations, regardless of the UI
//! driving them. `VidzApi` owns the session state (the video library, the
//! playback controller, and the playlist store) and dispatches to the
//! command layer; it holds no business logic of its own.
//!
//! It is generic over the selection collaborator so the interactive read in
//! the search flows can be a terminal prompt in the binary and a
//! deterministic stub everywhere else:
//! - production: `VidzApi<PromptSelector>` (the binary's stdin prompt)
//! - non-interactive/tests: `VidzApi<NoSelection>`, `VidzApi<FixedSelection>`
//!
//! A session is single-threaded by construction; embedding the API in a
//! threaded host means putting the whole value behind one lock.

use rand::rngs::ThreadRng;

use crate::commands;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::VideoLibrary;
use crate::playback::Playback;
use crate::playlists::PlaylistStore;
use crate::select::Selector;

pub struct VidzApi<S: Selector> {
    library: VideoLibrary,
    playback: Playback,
    playlists: PlaylistStore,
    selector: S,
    rng: ThreadRng,
}

impl<S: Selector> VidzApi<S> {
    pub fn new(library: VideoLibrary, selector: S) -> Self {
        Self {
            library,
            playback: Playback::new(),
            playlists: PlaylistStore::new(),
            selector,
            rng: rand::thread_rng(),
        }
    }

    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    pub fn show_all_videos(&self) -> Result<CmdResult> {
        commands::catalog::list(&self.library)
    }

    pub fn number_of_videos(&self) -> Result<CmdResult> {
        commands::catalog::count(&self.library)
    }

    pub fn play_video(&mut self, id: &str) -> Result<CmdResult> {
        commands::play::play(&self.library, &mut self.playback, id)
    }

    pub fn play_random_video(&mut self) -> Result<CmdResult> {
        commands::play::play_random(&self.library, &mut self.playback, &mut self.rng)
    }

    pub fn stop_video(&mut self) -> Result<CmdResult> {
        commands::play::stop(&self.library, &mut self.playback)
    }

    pub fn pause_video(&mut self) -> Result<CmdResult> {
        commands::play::pause(&self.library, &mut self.playback)
    }

    pub fn continue_video(&mut self) -> Result<CmdResult> {
        commands::play::resume(&self.library, &mut self.playback)
    }

    pub fn show_playing(&self) -> Result<CmdResult> {
        commands::play::now_playing(&self.library, &self.playback)
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<CmdResult> {
        commands::playlist::create(&mut self.playlists, name)
    }

    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<CmdResult> {
        commands::playlist::add(&self.library, &mut self.playlists, name, id)
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Result<CmdResult> {
        commands::playlist::remove(&self.library, &mut self.playlists, name, id)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<CmdResult> {
        commands::playlist::clear(&mut self.playlists, name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<CmdResult> {
        commands::playlist::delete(&mut self.playlists, name)
    }

    pub fn show_all_playlists(&self) -> Result<CmdResult> {
        commands::playlist::list_all(&self.playlists)
    }

    pub fn show_playlist(&self, name: &str) -> Result<CmdResult> {
        commands::playlist::show(&self.library, &self.playlists, name)
    }

    pub fn search_videos(&mut self, term: &str) -> Result<CmdResult> {
        commands::search::by_title(
            &self.library,
            &mut self.playback,
            &mut self.selector,
            term,
        )
    }

    pub fn search_videos_with_tag(&mut self, tag: &str) -> Result<CmdResult> {
        commands::search::by_tag(&self.library, &mut self.playback, &mut self.selector, tag)
    }

    pub fn flag_video(&mut self, id: &str, reason: Option<&str>) -> Result<CmdResult> {
        commands::flag::flag(&mut self.library, &mut self.playback, id, reason)
    }

    pub fn allow_video(&mut self, id: &str) -> Result<CmdResult> {
        commands::flag::allow(&mut self.library, id)
    }
}
