//! The two search flows: filter the catalog, sort and number the matches,
//! then resolve an optional interactive selection into a playback action.

use crate::commands::play::transition_result;
use crate::commands::CmdResult;
use crate::error::{Result, VidzError};
use crate::library::VideoLibrary;
use crate::model::{SearchHit, Video};
use crate::playback::Playback;
use crate::select::Selector;

/// Title search: unflagged videos whose title contains `term`,
/// case-insensitively.
pub fn by_title<S: Selector>(
    library: &VideoLibrary,
    playback: &mut Playback,
    selector: &mut S,
    term: &str,
) -> Result<CmdResult> {
    let needle = term.to_lowercase();
    let candidates = library
        .unflagged()
        .into_iter()
        .filter(|v| v.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    run(library, playback, selector, term, candidates)
}

/// Tag search: unflagged videos carrying the tag exactly. Tags are stored
/// lowercase, so the query is folded before comparing.
pub fn by_tag<S: Selector>(
    library: &VideoLibrary,
    playback: &mut Playback,
    selector: &mut S,
    tag: &str,
) -> Result<CmdResult> {
    let needle = tag.to_lowercase();
    let candidates = library
        .unflagged()
        .into_iter()
        .filter(|v| v.tags.iter().any(|t| t == &needle))
        .cloned()
        .collect();
    run(library, playback, selector, tag, candidates)
}

fn run<S: Selector>(
    library: &VideoLibrary,
    playback: &mut Playback,
    selector: &mut S,
    query: &str,
    mut candidates: Vec<Video>,
) -> Result<CmdResult> {
    if candidates.is_empty() {
        return Err(VidzError::NoResults(query.to_string()));
    }
    candidates.sort_by(|a, b| a.title.cmp(&b.title));
    let hits: Vec<SearchHit> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, video)| SearchHit { rank: i + 1, video })
        .collect();

    // Anything that is not an in-range number counts as "no selection".
    let mut result = CmdResult::default();
    if let Some(choice) = selector.choose(query, &hits) {
        if choice >= 1 && choice <= hits.len() as i64 {
            let id = hits[(choice - 1) as usize].video.id.clone();
            result = transition_result(playback.play(library, &id)?);
        }
    }
    Ok(result.with_search_hits(hits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Event;
    use crate::select::{FixedSelection, NoSelection};

    #[test]
    fn title_search_is_sorted_and_numbered() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();

        let result =
            by_title(&library, &mut playback, &mut NoSelection, "CAT").unwrap();
        let listed: Vec<_> = result
            .search_hits
            .iter()
            .map(|h| (h.rank, h.video.title.as_str()))
            .collect();
        assert_eq!(listed, vec![(1, "Amazing Cats"), (2, "Another Cat Video")]);
        assert!(result.events.is_empty());
    }

    #[test]
    fn search_excludes_flagged_videos() {
        let mut library = VideoLibrary::builtin();
        library.set_flag("funny_dogs_video_id", "spam");
        let mut playback = Playback::new();

        match by_title(&library, &mut playback, &mut NoSelection, "dog") {
            Err(VidzError::NoResults(query)) => assert_eq!(query, "dog"),
            other => panic!("expected NoResults, got {:?}", other),
        }
    }

    #[test]
    fn unflagging_restores_search_visibility() {
        let mut library = VideoLibrary::builtin();
        library.set_flag("funny_dogs_video_id", "spam");
        library.clear_flag("funny_dogs_video_id");
        let mut playback = Playback::new();

        let result = by_title(&library, &mut playback, &mut NoSelection, "dog").unwrap();
        assert_eq!(result.search_hits.len(), 1);
    }

    #[test]
    fn tag_search_matches_exactly() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();

        let result = by_tag(&library, &mut playback, &mut NoSelection, "#CAT").unwrap();
        assert_eq!(result.search_hits.len(), 2);

        // Without the leading '#' nothing matches.
        assert!(matches!(
            by_tag(&library, &mut playback, &mut NoSelection, "cat"),
            Err(VidzError::NoResults(_))
        ));
    }

    #[test]
    fn in_range_selection_plays_the_ranked_video() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();

        let result = by_title(
            &library,
            &mut playback,
            &mut FixedSelection(Some(2)),
            "cat",
        )
        .unwrap();
        assert_eq!(
            result.events,
            vec![Event::Started {
                title: "Another Cat Video".to_string()
            }]
        );
        assert_eq!(playback.current_id(), Some("another_cat_video_id"));
    }

    #[test]
    fn selection_stops_whatever_was_playing() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();
        playback.play(&library, "funny_dogs_video_id").unwrap();

        let result = by_title(
            &library,
            &mut playback,
            &mut FixedSelection(Some(1)),
            "cat",
        )
        .unwrap();
        assert_eq!(
            result.events,
            vec![
                Event::Stopped {
                    title: "Funny Dogs".to_string()
                },
                Event::Started {
                    title: "Amazing Cats".to_string()
                },
            ]
        );
    }

    #[test]
    fn out_of_range_selection_is_a_no() {
        let library = VideoLibrary::builtin();
        let mut playback = Playback::new();

        for choice in [0, 3, -1, 99] {
            let result = by_title(
                &library,
                &mut playback,
                &mut FixedSelection(Some(choice)),
                "cat",
            )
            .unwrap();
            assert!(result.events.is_empty());
        }
        assert!(playback.current_id().is_none());
    }
}
