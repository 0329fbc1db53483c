//! feed-report — renders fetched syndication feeds into an indented,
//! word-wrapped plain-text report.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  ChannelEntry  ┌───────────┐  write_line  ┌─────────┐
//! │   host   │ ─────────────► │ report.rs │ ───────────► │ wrap.rs │ ──► file
//! │ (fetch + │                │ (render)  │              │ (wrap)  │
//! │  parse)  │                └───────────┘              └─────────┘
//! └──────────┘
//! ```
//!
//! * **`model`** — the `Channel`/`Item` records the host hands in, plus the
//!   per-render display options.
//! * **`wrap`** — the word-wrapping line writer all output funnels through.
//! * **`report`** — the three-phase renderer: count, body, footer.  Nothing
//!   at all is emitted when the channels hold zero items.
//! * **`convert`** — optional adapter from the [`rss`] crate's parsed types.
//! * **`error`** — the crate's error enum and `Result` alias.
//!
//! The crate does no fetching, no parsing of raw bytes, and keeps no state
//! between renders; it is the output-handler half of a feed aggregator.
//!
//! ## Example
//!
//! ```
//! use feed_report::{Channel, ChannelEntry, Item, ReportOptions, ReportRenderer};
//!
//! let entries = vec![ChannelEntry {
//!     channel: Channel {
//!         title: "Example Feed".into(),
//!         links: vec!["http://example.com/feed".into()],
//!         published: None,
//!         format: "RSS 2.0".into(),
//!         items: vec![Item {
//!             title: "Hello".into(),
//!             links: vec!["http://example.com/1".into()],
//!             author: None,
//!             published: None,
//!             summary: Some("A first post.".into()),
//!         }],
//!     },
//!     summarize_only: false,
//! }];
//!
//! let options = ReportOptions::default();
//! let renderer = ReportRenderer::new(&entries, &options, "my-aggregator 1.0");
//!
//! let mut buf = Vec::new();
//! assert!(renderer.write_to(&mut buf).unwrap());
//! assert!(String::from_utf8(buf).unwrap().contains("Hello"));
//! ```

pub mod convert;
pub mod error;
pub mod model;
pub mod report;
pub mod wrap;

pub use error::{Error, Result};
pub use model::{Channel, ChannelEntry, Item, ReportOptions};
pub use report::{ReportRenderer, MIME_TYPE};
pub use wrap::WordWrapWriter;
