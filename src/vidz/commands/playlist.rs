use crate::commands::{CmdResult, Event};
use crate::error::Result;
use crate::library::VideoLibrary;
use crate::playlists::PlaylistStore;

pub fn create(playlists: &mut PlaylistStore, name: &str) -> Result<CmdResult> {
    playlists.create(name)?;
    Ok(CmdResult::default().with_event(Event::PlaylistCreated {
        name: name.to_string(),
    }))
}

pub fn add(
    library: &VideoLibrary,
    playlists: &mut PlaylistStore,
    name: &str,
    id: &str,
) -> Result<CmdResult> {
    let video = playlists.add_video(library, name, id)?;
    Ok(CmdResult::default().with_event(Event::AddedToPlaylist {
        playlist: name.to_string(),
        title: video.title,
    }))
}

pub fn remove(
    library: &VideoLibrary,
    playlists: &mut PlaylistStore,
    name: &str,
    id: &str,
) -> Result<CmdResult> {
    let video = playlists.remove_video(library, name, id)?;
    Ok(CmdResult::default().with_event(Event::RemovedFromPlaylist {
        playlist: name.to_string(),
        title: video.title,
    }))
}

pub fn clear(playlists: &mut PlaylistStore, name: &str) -> Result<CmdResult> {
    playlists.clear(name)?;
    Ok(CmdResult::default().with_event(Event::PlaylistCleared {
        name: name.to_string(),
    }))
}

pub fn delete(playlists: &mut PlaylistStore, name: &str) -> Result<CmdResult> {
    playlists.delete(name)?;
    Ok(CmdResult::default().with_event(Event::PlaylistDeleted {
        name: name.to_string(),
    }))
}

pub fn list_all(playlists: &PlaylistStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_playlist_names(playlists.names()))
}

/// The videos of one playlist, insertion-ordered, flags included.
pub fn show(
    library: &VideoLibrary,
    playlists: &PlaylistStore,
    name: &str,
) -> Result<CmdResult> {
    let videos = playlists.videos(library, name)?;
    Ok(CmdResult::default().with_listed_videos(videos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VidzError;

    #[test]
    fn create_add_show_round_trip() {
        let library = VideoLibrary::builtin();
        let mut playlists = PlaylistStore::new();

        let result = create(&mut playlists, "Faves").unwrap();
        assert_eq!(
            result.events,
            vec![Event::PlaylistCreated {
                name: "Faves".to_string()
            }]
        );

        add(&library, &mut playlists, "Faves", "amazing_cats_video_id").unwrap();
        // Same video through the case-folded name is still a duplicate.
        assert!(matches!(
            add(&library, &mut playlists, "faves", "amazing_cats_video_id"),
            Err(VidzError::AlreadyInPlaylist)
        ));

        let shown = show(&library, &playlists, "Faves").unwrap();
        let titles: Vec<_> = shown.listed_videos.iter().map(|v| &v.title).collect();
        assert_eq!(titles, vec!["Amazing Cats"]);
    }

    #[test]
    fn listing_names_is_sorted_at_call_time() {
        let mut playlists = PlaylistStore::new();
        create(&mut playlists, "rock").unwrap();
        create(&mut playlists, "Ambient").unwrap();

        let result = list_all(&playlists).unwrap();
        assert_eq!(result.playlist_names, vec!["Ambient", "rock"]);
    }

    #[test]
    fn clear_and_delete_emit_their_events() {
        let library = VideoLibrary::builtin();
        let mut playlists = PlaylistStore::new();
        create(&mut playlists, "Mix").unwrap();
        add(&library, &mut playlists, "Mix", "funny_dogs_video_id").unwrap();

        let result = clear(&mut playlists, "Mix").unwrap();
        assert_eq!(
            result.events,
            vec![Event::PlaylistCleared {
                name: "Mix".to_string()
            }]
        );
        assert!(show(&library, &playlists, "Mix").unwrap().listed_videos.is_empty());

        let result = delete(&mut playlists, "Mix").unwrap();
        assert_eq!(
            result.events,
            vec![Event::PlaylistDeleted {
                name: "Mix".to_string()
            }]
        );
        assert!(matches!(
            show(&library, &playlists, "Mix"),
            Err(VidzError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn show_includes_flag_state_for_display() {
        let mut library = VideoLibrary::builtin();
        let mut playlists = PlaylistStore::new();
        create(&mut playlists, "Mix").unwrap();
        add(&library, &mut playlists, "Mix", "funny_dogs_video_id").unwrap();

        library.set_flag("funny_dogs_video_id", "spam");
        let shown = show(&library, &playlists, "Mix").unwrap();
        assert_eq!(shown.listed_videos[0].flag.as_deref(), Some("spam"));
    }
}
