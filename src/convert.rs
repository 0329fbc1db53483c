//! Building report input from already-parsed [`rss`] crate values.
//!
//! The host owns fetching and parsing; this module only bridges the `rss`
//! crate's representation into the report's [`Channel`]/[`Item`] model.
//! Hosts using another parser can skip it entirely and build the model
//! structs directly.

use chrono::{DateTime, Utc};

use crate::model::{Channel, Item};

/// Convert a parsed RSS channel, items included.
pub fn channel_from_rss(channel: &rss::Channel) -> Channel {
    let links = if channel.link().is_empty() {
        Vec::new()
    } else {
        vec![channel.link().to_string()]
    };

    Channel {
        title: channel.title().to_string(),
        links,
        published: parse_date(channel.pub_date()),
        format: "RSS 2.0".to_string(),
        items: channel.items().iter().map(item_from_rss).collect(),
    }
}

/// Convert one parsed RSS item.
pub fn item_from_rss(item: &rss::Item) -> Item {
    Item {
        title: item.title().unwrap_or("(untitled)").to_string(),
        links: item.link().map(String::from).into_iter().collect(),
        author: item.author().map(String::from),
        published: parse_date(item.pub_date()),
        summary: item.description().map(String::from),
    }
}

/// RSS carries RFC 2822 dates; anything unparseable is treated as absent.
fn parse_date(date: Option<&str>) -> Option<DateTime<Utc>> {
    date.and_then(|d| DateTime::parse_from_rfc2822(d).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_rss_item(title: Option<&str>, link: Option<&str>) -> rss::Item {
        let mut item = rss::Item::default();
        item.set_title(title.map(String::from));
        item.set_link(link.map(String::from));
        item
    }

    #[test]
    fn channel_fields_carry_over() {
        let mut channel = rss::Channel::default();
        channel.set_title("Example".to_string());
        channel.set_link("http://example.com/".to_string());
        channel.set_items(vec![make_rss_item(Some("One"), Some("http://example.com/1"))]);

        let converted = channel_from_rss(&channel);
        assert_eq!(converted.title, "Example");
        assert_eq!(converted.canonical_link().unwrap(), "http://example.com/");
        assert_eq!(converted.format, "RSS 2.0");
        assert_eq!(converted.items.len(), 1);
        assert_eq!(converted.items[0].title, "One");
    }

    #[test]
    fn empty_channel_link_yields_no_links() {
        let channel = rss::Channel::default();
        let converted = channel_from_rss(&channel);
        assert!(converted.links.is_empty());
        assert!(converted.canonical_link().is_err());
    }

    #[test]
    fn untitled_items_get_a_placeholder() {
        let item = item_from_rss(&make_rss_item(None, Some("http://example.com/1")));
        assert_eq!(item.title, "(untitled)");
    }

    #[test]
    fn rfc2822_dates_parse_to_utc() {
        let mut raw = make_rss_item(Some("Dated"), Some("http://example.com/1"));
        raw.set_pub_date("Sat, 14 Mar 2026 09:30:00 GMT".to_string());

        let item = item_from_rss(&raw);
        let expected = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(item.published, Some(expected));
    }

    #[test]
    fn malformed_dates_are_treated_as_absent() {
        let mut raw = make_rss_item(Some("Bad date"), Some("http://example.com/1"));
        raw.set_pub_date("not a date".to_string());
        assert_eq!(item_from_rss(&raw).published, None);
    }

    #[test]
    fn description_becomes_the_summary() {
        let mut raw = make_rss_item(Some("With body"), Some("http://example.com/1"));
        raw.set_description("Some longer text.".to_string());
        assert_eq!(
            item_from_rss(&raw).summary.as_deref(),
            Some("Some longer text.")
        );
    }
}
