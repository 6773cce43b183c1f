use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Moderation flag with a reason; `None` means the video is allowed.
    /// Never read from or written to library files.
    #[serde(skip)]
    pub flag: Option<String>,
}

impl Video {
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags,
            flag: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }
}

/// The active playback target, as reported by the status query.
#[derive(Debug, Clone)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// One numbered search result. Ranks are 1-based and dense in the order the
/// query produced.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub rank: usize,
    pub video: Video,
}
