use thiserror::Error;

/// Every failure a vidz operation can report. All of these are expected,
/// recoverable outcomes; the CLI decides how to word them.
#[derive(Error, Debug)]
pub enum VidzError {
    #[error("Video does not exist")]
    VideoNotFound(String),

    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist(String),

    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video already paused: {0}")]
    AlreadyPaused(String),

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NothingAvailable,

    #[error("No search results for {0}")]
    NoResults(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Library error: {0}")]
    Library(String),
}

pub type Result<T> = std::result::Result<T, VidzError>;
