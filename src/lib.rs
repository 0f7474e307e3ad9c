//! In-memory XML document tree, with a formatted writer.
//!
//! Build a tree of [`Node`]s, wrap the root in a [`Document`], then write it to a file,
//! any [`std::io::Write`], or a `String`.
//!
//! ```rust
//! use xmldoc::{Document, Node};
//!
//! let mut root = Node::new("bookstore");
//! let book = root.emplace_child(Node::new("book"));
//! book.add_attribute("category", "fiction");
//! book.emplace_child(Node::with_value("title", "Dune"));
//!
//! let document = Document::new(root, "1.0").with_add_prolog(false);
//! assert_eq!(
//!     document.to_xml().unwrap(),
//!     "<bookstore>\n\t<book category=\"fiction\">\n\t\t<title>Dune</title>\n\t</book>\n</bookstore>\n"
//! );
//! ```
//!
//! Values are written as-is unless [`Document::with_escape_entities`] is enabled.
//! Reading documents back is not supported; [`Document::read_document`] reports
//! [`XmlError::NotImplemented`].

mod error;
pub use error::*;

mod node;
pub use node::*;

mod encoding;
pub use encoding::TextEncoding;

mod document;
pub use document::*;

pub mod to_xml;
