//! # Quickfeed
//!
//! A terminal client for a categorized news service, with on-demand
//! article summaries and word lookups for language learners.
//!
//! ## Architecture
//!
//! ```text
//! Client → Aggregator → CategoryFeed ─┐
//!        → Selection  → summary      ─┼→ UI
//!        → Lookup     → meaning      ─┘
//! ```
//!
//! - [`client`]: HTTP access to the news service
//! - [`aggregator`]: Concurrent per-category fetching
//! - [`session`]: Article selection and word lookup state machines
//! - [`wrap`]: Greedy row layout for the summary text
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # List categories
//! quickfeed categories
//!
//! # Fetch everything, or one category
//! quickfeed news --category tech
//!
//! # Summarize an article, define a word
//! quickfeed summary https://example.com/story
//! quickfeed define sharply
//!
//! # Launch TUI (the default)
//! quickfeed
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the client to the
/// aggregator and the session state machines.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/quickfeed/config.toml`, supporting:
/// - Service URL, timeout and worker count
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Command-line interface using clap.
///
/// - `categories` - List categories
/// - `news [--category <name>]` - Aggregate and print articles
/// - `summary <link>` - Print an article summary
/// - `define <word>` - Print a word definition
/// - `tui` - Launch the TUI
pub mod cli;

/// Core domain models.
///
/// - [`Article`](domain::Article): One listed news entry
/// - [`CategoryFeed`](domain::CategoryFeed): Aggregation result
/// - [`SelectionState`](domain::SelectionState) and
///   [`LookupState`](domain::LookupState): UI-facing session state
pub mod domain;

/// Remote news service access.
///
/// - [`FeedClient`](client::FeedClient): Async trait over the four endpoints
/// - [`HttpFeedClient`](client::HttpFeedClient): reqwest-based implementation
pub mod client;

/// Fan-out of per-category requests bounded by a semaphore.
pub mod aggregator;

/// Superseding state machines for the selected article and word lookups.
pub mod session;

/// Greedy first-fit wrapping of measured tokens into rows.
pub mod wrap;

/// Terminal user interface.
///
/// Three-pane layout built with ratatui:
/// - Categories pane (compact)
/// - Articles pane (35% height)
/// - Summary pane (remaining), with a learning mode word cursor
///
/// Keybindings: j/k navigate, Tab cycles panes, Enter selects,
/// l toggles learning mode, o opens in browser, R refreshes, q quits.
pub mod tui;
