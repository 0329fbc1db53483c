//! The data types the report is rendered from.
//!
//! The host aggregator fetches and parses feeds, then hands the renderer a
//! slice of [`ChannelEntry`] values.  Everything here is plain owned data:
//! the renderer borrows it immutably and never modifies it.
//!
//! ## For contributors
//!
//! If your host parses a format this crate's [`convert`](crate::convert)
//! module doesn't cover, just build [`Channel`] and [`Item`] values directly
//! — there is no trait to implement.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// A syndication feed's metadata plus its ordered items.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Human-readable feed title.
    pub title: String,

    /// Ordered link URLs.  The first entry is the canonical link used for
    /// single-line display; see [`Channel::canonical_link`].
    pub links: Vec<String>,

    /// Publication timestamp of the feed itself, if the source provided one.
    pub published: Option<DateTime<Utc>>,

    /// Format/version label (e.g. "RSS 2.0"), shown when the
    /// `show_format` option is on.
    pub format: String,

    /// The channel's items, in the order the host supplied them.  The
    /// renderer never reorders or de-duplicates.
    pub items: Vec<Item>,
}

/// One entry within a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Human-readable headline.
    pub title: String,

    /// Ordered link URLs; the first is canonical, as for [`Channel::links`].
    pub links: Vec<String>,

    /// Author name, if the source provided one.
    pub author: Option<String>,

    /// Publication timestamp, if the source provided one.
    pub published: Option<DateTime<Utc>>,

    /// Longer summary or description text.  This is the only field that is
    /// word-wrapped across multiple lines in the report.
    pub summary: Option<String>,
}

/// A [`Channel`] paired with its per-feed display metadata.
///
/// This pairing — not the bare channel — is the unit the renderer iterates
/// over, because "how to display this feed" is configured per feed by the
/// host, not globally.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelEntry {
    pub channel: Channel,

    /// Suppress each item's summary body even when the item has one.
    pub summarize_only: bool,
}

/// Report-wide display options, supplied once per render by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Show channel and item publication dates.
    pub show_dates: bool,

    /// Show the `(Format: ...)` line in each channel header.
    pub show_format: bool,

    /// Optional text shown once at the top of the report — but only when
    /// there is at least one item to report.
    pub lead_in_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Canonical link access
// ---------------------------------------------------------------------------

impl Channel {
    /// The first link in the channel's ordered link sequence.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelWithoutLink`] if the sequence is empty.
    pub fn canonical_link(&self) -> Result<&str> {
        self.links
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::ChannelWithoutLink {
                title: self.title.clone(),
            })
    }
}

impl Item {
    /// The first link in the item's ordered link sequence.
    ///
    /// # Errors
    ///
    /// [`Error::ItemWithoutLink`] if the sequence is empty.
    pub fn canonical_link(&self) -> Result<&str> {
        self.links
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::ItemWithoutLink {
                title: self.title.clone(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_channel(links: Vec<String>) -> Channel {
        Channel {
            title: "Example Feed".to_string(),
            links,
            published: None,
            format: "RSS 2.0".to_string(),
            items: Vec::new(),
        }
    }

    #[test]
    fn channel_canonical_link_is_first() {
        let channel = make_channel(vec![
            "http://example.com/".to_string(),
            "http://mirror.example.com/".to_string(),
        ]);
        assert_eq!(channel.canonical_link().unwrap(), "http://example.com/");
    }

    #[test]
    fn channel_without_links_is_an_error() {
        let channel = make_channel(Vec::new());
        let err = channel.canonical_link().unwrap_err();
        assert!(matches!(err, Error::ChannelWithoutLink { ref title } if title == "Example Feed"));
    }

    #[test]
    fn item_without_links_is_an_error() {
        let item = Item {
            title: "Linkless".to_string(),
            links: Vec::new(),
            author: None,
            published: None,
            summary: None,
        };
        let err = item.canonical_link().unwrap_err();
        assert!(matches!(err, Error::ItemWithoutLink { ref title } if title == "Linkless"));
    }
}
