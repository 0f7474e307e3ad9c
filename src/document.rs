use crate::{
    Node, TextEncoding,
    error::{XmlError, XmlResult},
};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

/// An XML document: a single root node, plus the settings used to write it.
///
/// Settings:
/// - `version` is written in the `<?xml` declaration
/// - `namespace` is stored with the document, but never written
/// - `add_prolog` controls whether the `<?xml` declaration is written (default: on)
/// - `new_lines` controls whether line breaks and tab indentation are written (default: on)
/// - `encoding` selects the text representation of the output (default: UTF-8)
/// - `escape_entities` encodes `&`, `<`, `>` and quotes in values (default: off, values are written raw)
///
/// Writing never modifies the document, so it can be written any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
    version: String,
    namespace: String,
    add_prolog: bool,
    new_lines: bool,
    encoding: TextEncoding,
    escape_entities: bool,
}
impl Document {
    /// Creates a new document around the given root node, with default settings.
    ///
    /// # Example
    /// ```rust
    /// use xmldoc::{Document, Node};
    ///
    /// let mut root = Node::new("root");
    /// root.add_attribute("id", "1");
    /// root.emplace_child(Node::with_value("leaf", "hello"));
    ///
    /// let document = Document::new(root, "1.0");
    /// assert_eq!(
    ///     document.to_xml().unwrap(),
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root id=\"1\">\n\t<leaf>hello</leaf>\n</root>\n"
    /// );
    /// ```
    pub fn new(root: Node, version: impl Into<String>) -> Self {
        Self {
            root,
            version: version.into(),
            namespace: String::new(),
            add_prolog: true,
            new_lines: true,
            encoding: TextEncoding::default(),
            escape_entities: false,
        }
    }

    /// Sets the namespace stored with the document.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets whether the `<?xml` declaration is written.
    #[must_use]
    pub fn with_add_prolog(mut self, add_prolog: bool) -> Self {
        self.add_prolog = add_prolog;
        self
    }

    /// Sets whether line breaks and indentation are written.
    #[must_use]
    pub fn with_new_lines(mut self, new_lines: bool) -> Self {
        self.new_lines = new_lines;
        self
    }

    /// Sets the text representation of the output.
    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets whether values are entity encoded when written.
    #[must_use]
    pub fn with_escape_entities(mut self, escape_entities: bool) -> Self {
        self.escape_entities = escape_entities;
        self
    }

    /// Get the root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the root node, mutably.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Get the version written in the `<?xml` declaration.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the version, mutably.
    pub fn version_mut(&mut self) -> &mut String {
        &mut self.version
    }

    /// Get the stored namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the stored namespace, mutably.
    pub fn namespace_mut(&mut self) -> &mut String {
        &mut self.namespace
    }

    /// Returns true if the `<?xml` declaration is written.
    #[must_use]
    pub fn add_prolog(&self) -> bool {
        self.add_prolog
    }

    /// Sets whether the `<?xml` declaration is written.
    pub fn set_add_prolog(&mut self, add_prolog: bool) {
        self.add_prolog = add_prolog;
    }

    /// Returns true if line breaks and indentation are written.
    #[must_use]
    pub fn new_lines(&self) -> bool {
        self.new_lines
    }

    /// Sets whether line breaks and indentation are written.
    pub fn set_new_lines(&mut self, new_lines: bool) {
        self.new_lines = new_lines;
    }

    /// Get the text representation of the output.
    #[must_use]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Sets the text representation of the output.
    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    /// Returns true if values are entity encoded when written.
    #[must_use]
    pub fn escape_entities(&self) -> bool {
        self.escape_entities
    }

    /// Sets whether values are entity encoded when written.
    pub fn set_escape_entities(&mut self, escape_entities: bool) {
        self.escape_entities = escape_entities;
    }

    /// Read a document from a file.
    ///
    /// Reading is not supported yet: once the file is opened this always fails with
    /// [`XmlError::NotImplemented`].
    ///
    /// # Errors
    /// Returns [`XmlError::FailedToOpen`] if the file cannot be opened, otherwise [`XmlError::NotImplemented`]
    #[tracing::instrument]
    pub fn read_document(path: impl AsRef<Path> + std::fmt::Debug) -> XmlResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            tracing::warn!("Failed to open {} for reading: {source}", path.display());
            XmlError::FailedToOpen {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::read_from_stream(file)
    }

    /// Read a document from a stream.
    ///
    /// Reading is not supported yet; this always fails.
    ///
    /// # Errors
    /// Always returns [`XmlError::NotImplemented`]
    pub fn read_from_stream<R: Read>(_reader: R) -> XmlResult<Self> {
        Err(XmlError::NotImplemented("reading XML documents"))
    }

    /// Write this document to a file, creating or truncating it.
    ///
    /// The file is closed before returning, whether or not the write succeeded.
    ///
    /// # Errors
    /// Returns [`XmlError::FailedToOpen`] if the file cannot be created,
    /// or [`XmlError::Io`] if writing to it fails.
    #[tracing::instrument(skip(self))]
    pub fn write_document(&self, path: impl AsRef<Path> + std::fmt::Debug) -> XmlResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            tracing::warn!("Failed to open {} for writing: {source}", path.display());
            XmlError::FailedToOpen {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::debug!("Writing document to {}", path.display());
        let mut writer = BufWriter::new(file);
        self.write_to_stream(&mut writer)?;
        writer.flush()?;

        tracing::debug!("Document written");
        Ok(())
    }

    /// Write this document to an already open writer, such as a buffer or stdout.
    ///
    /// # Errors
    /// Returns an error if the writer fails, or if a value cannot be entity encoded.
    pub fn write_to_stream<W: Write + ?Sized>(&self, mut writer: &mut W) -> XmlResult<()> {
        crate::to_xml::write_xml(&mut writer, self)
    }

    /// Create an XML string from this document.
    ///
    /// The string holds the document text regardless of [`TextEncoding`]; use
    /// [`Document::write_to_stream`] to get the encoded bytes.
    ///
    /// # Errors
    /// Can fail if a value in the document cannot be entity encoded.
    pub fn to_xml(&self) -> XmlResult<String> {
        let mut buffer = vec![];
        crate::to_xml::write_xml_as(&mut buffer, self, TextEncoding::Utf8)?;

        let buffer = String::from_utf8(buffer).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to convert to UTF-8: {e}"),
            )
        })?;
        Ok(buffer)
    }
}
