//! Error chain formatting utilities.

use crate::chain::Link;
use crate::types::alloc_type::{Cow, String};
use crate::types::Error;
use core::fmt::{Display, Write};

/// Configuration for rendering an error chain.
///
/// The compact layout puts the whole chain on one line:
/// `[caller]: message (kind): [caller]: message (kind): foreign`.
/// The verbose layout adds a block per node with the source location and the
/// node's own fields, and joins nodes with a "Caused by" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub header: Cow<'static, str>,
    pub cause_marker: Cow<'static, str>,
    pub indent: Cow<'static, str>,
    pub verbose: bool,
    pub show_location: bool,
    pub show_fields: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            header: Cow::Borrowed("Error"),
            cause_marker: Cow::Borrowed("Caused by"),
            indent: Cow::Borrowed("    "),
            verbose: false,
            show_location: true,
            show_fields: true,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn compact() -> Self {
        Self::default()
    }

    #[inline]
    pub fn verbose() -> Self {
        Self { verbose: true, ..Default::default() }
    }

    /// Renders `error` and every cause below it.
    pub fn render(&self, error: &Error) -> String {
        let mut buf = String::with_capacity(64);
        if self.verbose {
            buf.push_str(&self.header);
        }

        for link in error.links() {
            match link {
                Link::Node(node) => {
                    if !core::ptr::eq(node, error) && self.verbose {
                        buf.push_str(&self.cause_marker);
                    }
                    self.render_node(&mut buf, node);
                },
                Link::Foreign(foreign) => {
                    if self.verbose {
                        buf.push_str(&self.cause_marker);
                    }
                    pad(&mut buf, ": ");
                    let _ = write!(buf, "{}", foreign);
                },
            }
        }
        buf
    }

    fn render_node(&self, buf: &mut String, node: &Error) {
        let site = node.call_site();
        if !site.caller().is_empty() {
            pad(buf, ": ");
            buf.push('[');
            buf.push_str(site.caller());
            buf.push(']');
        }

        if let Some(message) = node.message().filter(|m| !m.is_empty()) {
            pad(buf, ": ");
            buf.push_str(message);
        }

        if let Some(kind) = node.kind().filter(|k| !k.is_empty()) {
            pad(buf, " ");
            buf.push('(');
            buf.push_str(kind.as_str());
            buf.push(')');
        }

        if !self.verbose {
            return;
        }

        buf.push('\n');
        if self.show_location {
            let _ = writeln!(buf, "{}File: \"{}\", line {}", self.indent, site.file(), site.line());
        }

        let Some(fields) = node.fields().filter(|f| self.show_fields && !f.is_empty()) else {
            return;
        };
        buf.push_str(&self.indent);
        buf.push_str("With fields:\n");
        for (key, value) in fields {
            let _ = writeln!(buf, "{}- \"{}\": {}", self.indent, key, value);
        }
    }
}

/// Writes `sep` unless nothing has been written yet.
#[inline]
fn pad(buf: &mut String, sep: &str) {
    if !buf.is_empty() {
        buf.push_str(sep);
    }
}

/// Builder for customizing error display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn compact(mut self) -> Self {
        self.config.verbose = false;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.config.verbose = true;
        self
    }

    pub fn header(mut self, header: impl Into<Cow<'static, str>>) -> Self {
        self.config.header = header.into();
        self
    }

    pub fn cause_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.config.cause_marker = marker.into();
        self
    }

    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn show_location(mut self, show: bool) -> Self {
        self.config.show_location = show;
        self
    }

    pub fn show_fields(mut self, show: bool) -> Self {
        self.config.show_fields = show;
        self
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.config.render(self.error))
    }
}
