//! The plain-text report renderer.
//!
//! Rendering runs in three strictly sequential phases:
//!
//! 1. **Count** — sum the item counts of every channel.  Zero items means
//!    the whole operation is a no-op: no file, no MIME type, no footer.
//! 2. **Body** — optional lead-in message, then one header-plus-items block
//!    per channel, in the order the host supplied them.
//! 3. **Footer** — a horizontal rule and the host's version string.
//!
//! All output funnels through [`WordWrapWriter`]; indentation is an integer
//! depth threaded through the render calls and converted to a 4-space-per-
//! level prefix at the point of use, so the renderer itself holds no hidden
//! formatting state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::model::{ChannelEntry, ReportOptions};
use crate::wrap::WordWrapWriter;

/// MIME type reported to the host for a non-empty report.
pub const MIME_TYPE: &str = "text/plain";

/// Separator line between report sections.
const HORIZONTAL_RULE: &str =
    "--------------------------------------------------------------------------------";

/// One level of indentation.
const INDENT: &str = "    ";

/// Renders a batch of channels into one plain-text report.
///
/// The renderer borrows everything it is given and holds no state across
/// invocations; one value per render is the expected usage.
pub struct ReportRenderer<'a> {
    entries: &'a [ChannelEntry],
    options: &'a ReportOptions,
    version: &'a str,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(entries: &'a [ChannelEntry], options: &'a ReportOptions, version: &'a str) -> Self {
        Self {
            entries,
            options,
            version,
        }
    }

    /// Total item count across all channels — the count phase.
    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|e| e.channel.items.len()).sum()
    }

    /// Render the report to a file at `path`.
    ///
    /// When the count phase finds zero items the file is never created or
    /// opened and `Ok(None)` is returned.  Otherwise the report is written,
    /// flushed, and `Ok(Some(`[`MIME_TYPE`]`))` is returned for the host to
    /// declare.
    ///
    /// # Errors
    ///
    /// Any I/O failure, or a channel/item with an empty link sequence.
    pub fn write_file(&self, path: &Path) -> Result<Option<&'static str>> {
        if self.total_items() == 0 {
            return Ok(None);
        }
        let file = File::create(path)?;
        let mut out = WordWrapWriter::new(BufWriter::new(file));
        self.render(&mut out)?;
        out.flush()?;
        Ok(Some(MIME_TYPE))
    }

    /// Render the report to any sink the host already owns.
    ///
    /// Returns whether anything was written — `false` means the count phase
    /// found zero items and the sink was not touched.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<bool> {
        if self.total_items() == 0 {
            return Ok(false);
        }
        let mut out = WordWrapWriter::new(sink);
        self.render(&mut out)?;
        out.flush()?;
        Ok(true)
    }

    // -- body + footer (only reached when total_items() > 0) -----------------

    fn render<W: Write>(&self, out: &mut WordWrapWriter<W>) -> Result<()> {
        indent(out, 0);

        if let Some(message) = &self.options.lead_in_message {
            out.write_line(message)?;
            out.blank_line()?;
        }

        for entry in self.entries {
            self.render_channel(out, entry, 0)?;
        }

        // Footer.
        indent(out, 0);
        out.blank_line()?;
        out.write_line(HORIZONTAL_RULE)?;
        out.write_line(self.version)?;
        Ok(())
    }

    /// One channel header plus all of its item blocks.
    ///
    /// Headers are emitted even for channels with zero items of their own —
    /// the zero-item gate is global, not per channel.
    fn render_channel<W: Write>(
        &self,
        out: &mut WordWrapWriter<W>,
        entry: &ChannelEntry,
        depth: usize,
    ) -> Result<()> {
        let channel = &entry.channel;
        debug!(channel = %channel.title, "rendering channel");

        indent(out, depth);
        out.write_line(HORIZONTAL_RULE)?;
        out.write_line(&channel.title)?;
        out.write_line(channel.canonical_link()?)?;
        out.write_line(&format!("{} item(s)", channel.items.len()))?;

        if self.options.show_dates {
            if let Some(date) = channel.published {
                out.write_line(&format_date(date))?;
            }
        }
        if self.options.show_format {
            out.write_line(&format!("(Format: {})", channel.format))?;
        }

        let depth = depth + 1;
        indent(out, depth);
        for item in &channel.items {
            out.blank_line()?;
            out.write_line(&item.title)?;
            if let Some(author) = &item.author {
                out.write_line(author)?;
            }
            out.write_line(item.canonical_link()?)?;
            if self.options.show_dates {
                if let Some(date) = item.published {
                    out.write_line(&format_date(date))?;
                }
            }
            out.blank_line()?;

            if !entry.summarize_only {
                if let Some(summary) = &item.summary {
                    // One extra level for the summary body, restored after.
                    indent(out, depth + 1);
                    out.write_line(summary)?;
                    indent(out, depth);
                }
            }
        }
        Ok(())
    }
}

/// Convert a numeric indentation depth into the writer's prefix string.
fn indent<W: Write>(out: &mut WordWrapWriter<W>, depth: usize) {
    out.set_prefix(INDENT.repeat(depth));
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
