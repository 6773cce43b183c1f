//! The interactive shell: one command per line, dispatched through the API.
//! Pure glue; parsing and printing happen here, state changes happen behind
//! the facade.

use std::io::{self, IsTerminal, Write};

use vidz::api::VidzApi;
use vidz::error::Result;
use vidz::model::SearchHit;
use vidz::select::Selector;

use crate::print;

/// The production selector: renders the numbered results, prompts, and
/// reads one line from stdin.
pub struct PromptSelector;

impl Selector for PromptSelector {
    fn choose(&mut self, query: &str, hits: &[SearchHit]) -> Option<i64> {
        print::search_results(query, hits);
        print::selection_prompt();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(n) if n > 0 => line.trim().parse().ok(),
            _ => None,
        }
    }
}

type Api = VidzApi<PromptSelector>;

pub fn run(api: &mut Api) -> Result<()> {
    print::greeting(api.library().len());
    let interactive = io::stdin().is_terminal();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(api, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Returns false when the session should end.
fn dispatch(api: &mut Api, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return true;
    };
    let args: Vec<&str> = parts.collect();

    match keyword.to_lowercase().as_str() {
        "help" => print::help(),
        "exit" | "quit" => return false,
        "videos" | "list" => handle_videos(api),
        "count" => handle_count(api),
        "play" => match args.first() {
            Some(id) => handle_play(api, id),
            None => print::usage("play <video id>"),
        },
        "random" => handle_random(api),
        "stop" => handle_stop(api),
        "pause" => handle_pause(api),
        "continue" | "resume" => handle_continue(api),
        "now" => handle_now(api),
        "playlists" => handle_playlists(api),
        "playlist" => handle_playlist(api, &args),
        "search" => {
            if args.is_empty() {
                print::usage("search <term>");
            } else {
                handle_search(api, &args.join(" "));
            }
        }
        "tag" => match args.first() {
            Some(tag) => handle_tag(api, tag),
            None => print::usage("tag <#tag>"),
        },
        "flag" => match args.split_first() {
            Some((id, rest)) => {
                let reason = (!rest.is_empty()).then(|| rest.join(" "));
                handle_flag(api, id, reason.as_deref());
            }
            None => print::usage("flag <video id> [reason]"),
        },
        "allow" => match args.first() {
            Some(id) => handle_allow(api, id),
            None => print::usage("allow <video id>"),
        },
        _ => print::unknown(keyword),
    }
    true
}

fn handle_videos(api: &mut Api) {
    match api.show_all_videos() {
        Ok(result) => {
            print::heading("Here's a list of all available videos:");
            print::videos(&result.listed_videos);
        }
        Err(e) => print::error(None, &e),
    }
}

fn handle_count(api: &mut Api) {
    match api.number_of_videos() {
        Ok(result) => print::video_count(result.video_count.unwrap_or_default()),
        Err(e) => print::error(None, &e),
    }
}

fn handle_play(api: &mut Api, id: &str) {
    match api.play_video(id) {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot play video"), &e),
    }
}

fn handle_random(api: &mut Api) {
    match api.play_random_video() {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot play video"), &e),
    }
}

fn handle_stop(api: &mut Api) {
    match api.stop_video() {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot stop video"), &e),
    }
}

fn handle_pause(api: &mut Api) {
    match api.pause_video() {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot pause video"), &e),
    }
}

fn handle_continue(api: &mut Api) {
    match api.continue_video() {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot continue video"), &e),
    }
}

fn handle_now(api: &mut Api) {
    match api.show_playing() {
        Ok(result) => print::now_playing(result.now_playing.as_ref()),
        Err(e) => print::error(None, &e),
    }
}

fn handle_playlists(api: &mut Api) {
    match api.show_all_playlists() {
        Ok(result) => {
            if result.playlist_names.is_empty() {
                print::note("No playlists exist yet");
            } else {
                print::heading("Showing all playlists:");
                print::playlist_names(&result.playlist_names);
            }
        }
        Err(e) => print::error(None, &e),
    }
}

fn handle_playlist(api: &mut Api, args: &[&str]) {
    let Some((sub, rest)) = args.split_first() else {
        print::usage("playlist <create|add|remove|clear|delete|show> ...");
        return;
    };

    match (sub.to_lowercase().as_str(), rest) {
        ("create", [name]) => match api.create_playlist(name) {
            Ok(result) => print::events(&result.events),
            Err(e) => print::error(Some("Cannot create playlist"), &e),
        },
        ("add", [name, id]) => match api.add_to_playlist(name, id) {
            Ok(result) => print::events(&result.events),
            Err(e) => print::error(Some(&format!("Cannot add video to {}", name)), &e),
        },
        ("remove", [name, id]) => match api.remove_from_playlist(name, id) {
            Ok(result) => print::events(&result.events),
            Err(e) => print::error(Some(&format!("Cannot remove video from {}", name)), &e),
        },
        ("clear", [name]) => match api.clear_playlist(name) {
            Ok(result) => print::events(&result.events),
            Err(e) => print::error(Some(&format!("Cannot clear playlist {}", name)), &e),
        },
        ("delete", [name]) => match api.delete_playlist(name) {
            Ok(result) => print::events(&result.events),
            Err(e) => print::error(Some(&format!("Cannot delete playlist {}", name)), &e),
        },
        ("show", [name]) => match api.show_playlist(name) {
            Ok(result) => {
                print::heading(&format!("Showing playlist: {}", name));
                if result.listed_videos.is_empty() {
                    print::note("No videos here yet");
                } else {
                    print::videos(&result.listed_videos);
                }
            }
            Err(e) => print::error(Some(&format!("Cannot show playlist {}", name)), &e),
        },
        _ => print::usage("playlist <create|add|remove|clear|delete|show> ..."),
    }
}

fn handle_search(api: &mut Api, term: &str) {
    match api.search_videos(term) {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(None, &e),
    }
}

fn handle_tag(api: &mut Api, tag: &str) {
    match api.search_videos_with_tag(tag) {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(None, &e),
    }
}

fn handle_flag(api: &mut Api, id: &str, reason: Option<&str>) {
    match api.flag_video(id, reason) {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot flag video"), &e),
    }
}

fn handle_allow(api: &mut Api, id: &str) {
    match api.allow_video(id) {
        Ok(result) => print::events(&result.events),
        Err(e) => print::error(Some("Cannot remove flag from video"), &e),
    }
}
