//! Rendering of structured command results. The only place that turns
//! events, listings, and error kinds into terminal lines.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use vidz::commands::Event;
use vidz::error::VidzError;
use vidz::model::{NowPlaying, SearchHit, Video};

pub(crate) fn greeting(count: usize) {
    note(&format!(
        "Welcome to vidz. {} videos in the library. Type 'help' to see the commands.",
        count
    ));
}

pub(crate) fn help() {
    println!("Available commands:");
    println!("  videos                             List every video in the library");
    println!("  count                              Show how many videos there are");
    println!("  play <video id>                    Play a video");
    println!("  random                             Play a random unflagged video");
    println!("  stop | pause | continue | now      Control the current video");
    println!("  playlists                          List all playlists");
    println!("  playlist create <name>             Create an empty playlist");
    println!("  playlist add <name> <video id>     Append a video to a playlist");
    println!("  playlist remove <name> <video id>  Remove a video from a playlist");
    println!("  playlist clear <name>              Remove all videos from a playlist");
    println!("  playlist delete <name>             Delete a playlist");
    println!("  playlist show <name>               List a playlist's videos");
    println!("  search <term>                      Search titles, then optionally play a hit");
    println!("  tag <#tag>                         Search by tag");
    println!("  flag <video id> [reason]           Block a video (stops it if playing)");
    println!("  allow <video id>                   Remove a video's flag");
    println!("  help | exit");
}

pub(crate) fn heading(text: &str) {
    println!("{}", text);
}

pub(crate) fn note(text: &str) {
    println!("{}", text.dimmed());
}

pub(crate) fn events(events: &[Event]) {
    for event in events {
        match event {
            Event::Stopped { title } => {
                println!("{}", format!("Stopping video: {}", title).dimmed())
            }
            Event::Started { title } => {
                println!("{}", format!("Playing video: {}", title).green())
            }
            Event::Paused { title } => {
                println!("{}", format!("Pausing video: {}", title).green())
            }
            Event::Resumed { title } => {
                println!("{}", format!("Continuing video: {}", title).green())
            }
            Event::PlaylistCreated { name } => println!(
                "{}",
                format!("Successfully created new playlist: {}", name).green()
            ),
            Event::AddedToPlaylist { playlist, title } => println!(
                "{}",
                format!("Added video to {}: {}", playlist, title).green()
            ),
            Event::RemovedFromPlaylist { playlist, title } => println!(
                "{}",
                format!("Removed video from {}: {}", playlist, title).green()
            ),
            Event::PlaylistCleared { name } => println!(
                "{}",
                format!("Successfully removed all videos from {}", name).green()
            ),
            Event::PlaylistDeleted { name } => {
                println!("{}", format!("Deleted playlist: {}", name).green())
            }
            Event::Flagged { title, reason } => println!(
                "{}",
                format!("Successfully flagged video: {} (reason: {})", title, reason).green()
            ),
            Event::FlagCleared { title } => println!(
                "{}",
                format!("Successfully removed flag from video: {}", title).green()
            ),
        }
    }
}

/// Renders an error kind, prefixed with the command's context where the
/// wording needs it. Some kinds already read as complete sentences.
pub(crate) fn error(context: Option<&str>, err: &VidzError) {
    let line = match (context, err) {
        (_, VidzError::NoResults(_))
        | (_, VidzError::NothingAvailable)
        | (_, VidzError::AlreadyPaused(_)) => err.to_string(),
        (Some(context), _) => format!("{}: {}", context, err),
        (None, _) => err.to_string(),
    };
    println!("{}", line.red());
}

pub(crate) fn videos(videos: &[Video]) {
    if videos.is_empty() {
        note("No videos in the library.");
        return;
    }
    let title_width = videos.iter().map(|v| v.title.width()).max().unwrap_or(0);
    for video in videos {
        println!("{}", video_line(video, title_width));
    }
}

pub(crate) fn playlist_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub(crate) fn search_results(query: &str, hits: &[SearchHit]) {
    heading(&format!("Here are the results for {}:", query));
    let title_width = hits
        .iter()
        .map(|h| h.video.title.width())
        .max()
        .unwrap_or(0);
    for hit in hits {
        println!("{}) {}", hit.rank, video_line(&hit.video, title_width));
    }
}

pub(crate) fn selection_prompt() {
    note("Would you like to play any of the above? If yes, specify the number of the video.");
    note("If your answer is not a valid number, we will assume it's a no.");
}

pub(crate) fn now_playing(now: Option<&NowPlaying>) {
    match now {
        Some(now) => {
            let mut line = format!("Currently playing: {}", video_line(&now.video, 0));
            if now.paused {
                line.push_str(&format!(" - {}", "PAUSED".yellow()));
            }
            println!("{}", line);
        }
        None => println!("No video is currently playing"),
    }
}

pub(crate) fn video_count(count: usize) {
    println!("{} videos in the library", count);
}

pub(crate) fn unknown(keyword: &str) {
    println!(
        "{}",
        format!(
            "Unknown command: {}. Type 'help' to see what vidz can do.",
            keyword
        )
        .yellow()
    );
}

pub(crate) fn usage(usage: &str) {
    println!("{}", format!("Usage: {}", usage).yellow());
}

/// One listing line: title, bracketed id, space-joined tags, and the flag
/// annotation when moderation applies. Titles are padded so the id column
/// lines up within a listing.
fn video_line(video: &Video, title_width: usize) -> String {
    let padding = " ".repeat(title_width.saturating_sub(video.title.width()));
    let mut line = format!(
        "{}{} ({}) [{}]",
        video.title,
        padding,
        video.id,
        video.tags.join(" ")
    );
    if let Some(reason) = &video.flag {
        line.push_str(
            &format!(" - FLAGGED (reason: {})", reason)
                .red()
                .to_string(),
        );
    }
    line
}
