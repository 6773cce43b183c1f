use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::VideoLibrary;

/// Every catalog entry, sorted by title. Flagged videos are listed too;
/// only search hides them.
pub fn list(library: &VideoLibrary) -> Result<CmdResult> {
    let mut videos: Vec<_> = library.all().into_iter().cloned().collect();
    videos.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(CmdResult::default().with_listed_videos(videos))
}

pub fn count(library: &VideoLibrary) -> Result<CmdResult> {
    Ok(CmdResult::default().with_video_count(library.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_videos_sorted_by_title() {
        let library = VideoLibrary::builtin();
        let result = list(&library).unwrap();

        let titles: Vec<_> = result.listed_videos.iter().map(|v| &v.title).collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Cats",
                "Another Cat Video",
                "Funny Dogs",
                "Life at Google",
                "Video about nothing",
            ]
        );
    }

    #[test]
    fn flagged_videos_stay_listed_with_their_reason() {
        let mut library = VideoLibrary::builtin();
        library.set_flag("funny_dogs_video_id", "spam");

        let result = list(&library).unwrap();
        let dogs = result
            .listed_videos
            .iter()
            .find(|v| v.id == "funny_dogs_video_id")
            .unwrap();
        assert_eq!(dogs.flag.as_deref(), Some("spam"));
    }

    #[test]
    fn counts_the_library() {
        let library = VideoLibrary::builtin();
        assert_eq!(count(&library).unwrap().video_count, Some(5));
    }
}
