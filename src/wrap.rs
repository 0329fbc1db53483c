//! Word-wrapping line writer.
//!
//! Everything the report emits funnels through [`WordWrapWriter`]: a
//! line-oriented sink that wraps at a fixed column width on word boundaries
//! and prepends the current indentation prefix to every physical line it
//! writes, continuation lines included.
//!
//! The renderer changes indentation by calling
//! [`set_prefix`](WordWrapWriter::set_prefix); the writer itself knows
//! nothing about channels or items.

use std::io::Write;

use crate::error::Result;

/// Default total line width, prefix included.
pub const DEFAULT_WIDTH: usize = 80;

/// A line writer that wraps text at a fixed column width.
///
/// Lines are broken only at whitespace.  A single word longer than the
/// available width is emitted whole on its own line — never split, never
/// truncated — so no input text is ever lost to wrapping.
///
/// Widths and break positions are computed per `char`, so multi-byte text
/// wraps without panicking on byte boundaries.
pub struct WordWrapWriter<W: Write> {
    out: W,
    width: usize,
    prefix: String,
}

impl<W: Write> WordWrapWriter<W> {
    /// Wrap at the conventional 80-column width.
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_WIDTH)
    }

    /// Wrap at an explicit total width.
    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            prefix: String::new(),
        }
    }

    /// Replace the indentation prefix used for all subsequently written
    /// lines.  Produces no output by itself.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Write `text` as one logical line, wrapping as needed.
    ///
    /// Every physical line is `prefix + content` and fits within the
    /// configured width, except for the unbreakable-word case described on
    /// the type.  Embedded line terminators force a break at that point.
    /// An empty `text` behaves like [`blank_line`](Self::blank_line).
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.blank_line();
        }

        // Embedded line terminators are forced breaks; each resulting
        // physical line carries the prefix like any other.
        if text.contains('\n') {
            for segment in text.split('\n') {
                self.wrap_segment(segment.trim_end_matches('\r'))?;
            }
            return Ok(());
        }

        self.wrap_segment(text)
    }

    fn wrap_segment(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.blank_line();
        }

        let available = self.width.saturating_sub(self.prefix.chars().count());
        let mut rest = text;
        loop {
            if rest.chars().count() <= available {
                return self.emit(rest);
            }

            // Window of the characters that fit, plus one more so that a
            // space sitting exactly on the boundary still counts as a
            // break opportunity.
            let window = &rest[..char_offset(rest, available + 1)];
            match window.rfind(char::is_whitespace) {
                Some(break_at) => {
                    self.emit(rest[..break_at].trim_end())?;
                    rest = rest[break_at..].trim_start();
                }
                None => {
                    // The head word alone exceeds the available width.
                    // Emit it whole rather than splitting or truncating.
                    match rest.find(char::is_whitespace) {
                        Some(space) => {
                            self.emit(&rest[..space])?;
                            rest = rest[space..].trim_start();
                        }
                        None => return self.emit(rest),
                    }
                }
            }
            if rest.is_empty() {
                return Ok(());
            }
        }
    }

    /// Write a bare line terminator.
    ///
    /// Blank lines never carry the prefix, so the report contains no
    /// whitespace-only lines.
    pub fn blank_line(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn emit(&mut self, content: &str) -> Result<()> {
        if content.is_empty() {
            return self.blank_line();
        }
        self.out.write_all(self.prefix.as_bytes())?;
        self.out.write_all(content.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Byte offset of the `n`-th character of `s`, or `s.len()` if `s` is
/// shorter than that.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
