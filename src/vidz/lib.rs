//! # Vidz Architecture
//!
//! Vidz is a **UI-agnostic video-player library** with a CLI shell on top.
//! The library simulates a streaming control panel over a fixed, in-memory
//! catalog: playback, moderation flags, named playlists, and interactive
//! numbered search.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args/shell/print, wired by main.rs)             │
//! │  - Parses the command line, runs the shell, renders output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the core components             │
//! │  - Operates on Rust types, returns typed events/listings    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (library, playback, playlists)                  │
//! │  - The catalog and the two state machines over it           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and **never** writes to stdout/stderr or formats
//! user-facing text: events and error kinds carry the data, the CLI does
//! the wording. The one interactive read in the search flows sits behind
//! the [`select::Selector`] trait so tests swap in a deterministic source.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`library`]: The video catalog and its sources
//! - [`playback`]: The single-active-playback state machine
//! - [`playlists`]: Named playlist collection
//! - [`select`]: The interactive-selection seam
//! - [`model`]: Core data types (`Video`, `NowPlaying`, `SearchHit`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod playback;
pub mod playlists;
pub mod select;
