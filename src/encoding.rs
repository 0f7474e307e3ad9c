//! Text representations a document can be written in.
use std::io::Write;

/// The text representation used when writing a document.
///
/// Selects the `encoding` named in the `<?xml` declaration, and the bytes written to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// 8-bit text, written as UTF-8
    #[default]
    Utf8,

    /// 16-bit text, written as little-endian UTF-16 after a byte order mark
    Utf16,

    /// Text explicitly tagged as UTF-8; written identically to [`TextEncoding::Utf8`]
    Utf8Literal,
}
impl TextEncoding {
    /// The encoding name used in the `<?xml` declaration.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 | Self::Utf8Literal => "UTF-8",
            Self::Utf16 => "UTF-16",
        }
    }

    /// The `<?xml` declaration for a document of the given version.
    ///
    /// # Example
    /// ```rust
    /// use xmldoc::TextEncoding;
    ///
    /// assert_eq!(
    ///     TextEncoding::Utf16.prolog("1.0"),
    ///     r#"<?xml version="1.0" encoding="UTF-16"?>"#
    /// );
    /// ```
    #[must_use]
    pub fn prolog(self, version: &str) -> String {
        let encoding = self.label();
        format!(r#"<?xml version="{version}" encoding="{encoding}"?>"#)
    }
}

/// Writes text fragments to a byte sink in a given representation.
pub(crate) struct TextSink<'w> {
    writer: &'w mut dyn Write,
    encoding: TextEncoding,
    buffer: Vec<u8>,
}
impl<'w> TextSink<'w> {
    pub(crate) fn new(writer: &'w mut dyn Write, encoding: TextEncoding) -> Self {
        Self {
            writer,
            encoding,
            buffer: vec![],
        }
    }

    /// Writes the byte order mark, if the representation needs one.
    pub(crate) fn begin(&mut self) -> std::io::Result<()> {
        match self.encoding {
            TextEncoding::Utf16 => self.writer.write_all(&[0xFF, 0xFE]),
            TextEncoding::Utf8 | TextEncoding::Utf8Literal => Ok(()),
        }
    }

    pub(crate) fn write_str(&mut self, text: &str) -> std::io::Result<()> {
        match self.encoding {
            TextEncoding::Utf8 | TextEncoding::Utf8Literal => self.writer.write_all(text.as_bytes()),
            TextEncoding::Utf16 => {
                self.buffer.clear();
                for unit in text.encode_utf16() {
                    self.buffer.extend_from_slice(&unit.to_le_bytes());
                }
                self.writer.write_all(&self.buffer)
            }
        }
    }
}
