//! Named, ordered, duplicate-free playlists of video ids.
//!
//! Playlist identity is case-insensitive: a lowercase key is stored next to
//! the case-preserved name so every lookup folds once, not per comparison.

use crate::error::{Result, VidzError};
use crate::library::VideoLibrary;
use crate::model::Video;

#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    key: String,
    videos: Vec<String>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            key: name.to_lowercase(),
            videos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v == id)
    }
}

/// All playlists of a session, in creation order. Display order is sorted
/// by name at call time and never persisted.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<()> {
        if self.find(name).is_some() {
            return Err(VidzError::DuplicatePlaylist(name.to_string()));
        }
        self.playlists.push(Playlist::new(name));
        Ok(())
    }

    /// Case-insensitive lookup of a playlist's position.
    pub fn find(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.playlists.iter().position(|p| p.key == key)
    }

    pub fn add_video(&mut self, library: &VideoLibrary, name: &str, id: &str) -> Result<Video> {
        let pos = self.resolve(name)?;
        let video = library
            .get(id)
            .ok_or_else(|| VidzError::VideoNotFound(id.to_string()))?;
        if let Some(reason) = &video.flag {
            return Err(VidzError::Flagged(reason.clone()));
        }
        let playlist = &mut self.playlists[pos];
        if playlist.contains(&video.id) {
            return Err(VidzError::AlreadyInPlaylist);
        }
        playlist.videos.push(video.id.clone());
        Ok(video.clone())
    }

    pub fn remove_video(&mut self, library: &VideoLibrary, name: &str, id: &str) -> Result<Video> {
        let pos = self.resolve(name)?;
        let video = library
            .get(id)
            .ok_or_else(|| VidzError::VideoNotFound(id.to_string()))?;
        let playlist = &mut self.playlists[pos];
        match playlist.videos.iter().position(|v| v == &video.id) {
            Some(i) => {
                playlist.videos.remove(i);
                Ok(video.clone())
            }
            None => Err(VidzError::NotInPlaylist),
        }
    }

    /// Empties a playlist. Clearing an already-empty playlist succeeds.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let pos = self.resolve(name)?;
        self.playlists[pos].videos.clear();
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let pos = self.resolve(name)?;
        self.playlists.remove(pos);
        Ok(())
    }

    /// All playlist names, sorted lexicographically for display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.playlists.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    /// The videos of a playlist in insertion order, each carrying its
    /// current flag state.
    pub fn videos(&self, library: &VideoLibrary, name: &str) -> Result<Vec<Video>> {
        let pos = self.resolve(name)?;
        Ok(self.playlists[pos]
            .videos
            .iter()
            .filter_map(|id| library.get(id))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.find(name)
            .ok_or_else(|| VidzError::PlaylistNotFound(name.to_string()))
    }
}
