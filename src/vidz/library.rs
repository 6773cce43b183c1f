//! The video catalog: an id-keyed, read-mostly collection populated once at
//! startup. The per-video moderation flag is the only thing that ever
//! changes after loading, and only through [`VideoLibrary::set_flag`] /
//! [`VideoLibrary::clear_flag`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{Result, VidzError};
use crate::model::Video;

const BUILTIN_LIBRARY: &str = include_str!("videos.json");

static BUILTIN: Lazy<Vec<Video>> = Lazy::new(|| {
    serde_json::from_str(BUILTIN_LIBRARY).expect("embedded video library is valid JSON")
});

#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: BTreeMap<String, Video>,
}

impl VideoLibrary {
    /// Builds a library from a list of videos. Tags are normalized to
    /// lowercase so tag search can compare exactly.
    pub fn new(videos: Vec<Video>) -> Self {
        let videos = videos
            .into_iter()
            .map(|mut video| {
                for tag in &mut video.tags {
                    *tag = tag.to_lowercase();
                }
                (video.id.clone(), video)
            })
            .collect();
        Self { videos }
    }

    /// The built-in sample catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.clone())
    }

    /// Loads a library from a JSON file: an array of
    /// `{"title": …, "id": …, "tags": […]}` objects.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let videos: Vec<Video> = serde_json::from_str(&content)?;
        for video in &videos {
            if video.id.is_empty() || video.title.is_empty() {
                return Err(VidzError::Library(
                    "every video needs a non-empty id and title".to_string(),
                ));
            }
        }
        Ok(Self::new(videos))
    }

    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Snapshot of every video. Callers sort as needed; no order is promised.
    pub fn all(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    /// Snapshot of every video not blocked by moderation.
    pub fn unflagged(&self) -> Vec<&Video> {
        self.videos.values().filter(|v| !v.is_flagged()).collect()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Marks a video as flagged. No-op when the id is unknown; callers that
    /// need an error check existence first.
    pub fn set_flag(&mut self, id: &str, reason: &str) {
        if let Some(video) = self.videos.get_mut(id) {
            video.flag = Some(reason.to_string());
        }
    }

    /// Clears a video's flag. No-op when the id is unknown.
    pub fn clear_flag(&mut self, id: &str) {
        if let Some(video) = self.videos.get_mut(id) {
            video.flag = None;
        }
    }
}
