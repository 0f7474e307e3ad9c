//! XML Writer Example
//!
//! This example builds a small document in memory, prints it, and writes it to a file.
//!
//! Things to note:
//! - Values are written exactly as given, unless entity escaping is turned on
//! - A node with children never writes its own value
//! - The namespace is stored on the document, but not written
use xmldoc::{Document, Node};

fn main() -> Result<(), xmldoc::XmlError> {
    //
    // Build the tree from the root down
    let mut root = Node::new("root");
    root.add_attribute("id", "1");

    let child = root.emplace_child(Node::new("child"));
    child.add_attribute("kind", "container");
    child.emplace_child(Node::with_value("leaf", "hello"));

    //
    // `add_child` copies, so the same template can be added more than once
    let template = Node::with_value("item", "same");
    root.add_child(&template);
    root.add_child(&template);

    let mut document = Document::new(root, "1.0").with_namespace("urn:example");
    println!("{}", document.to_xml()?);

    //
    // Everything on one line, with no declaration
    document.set_new_lines(false);
    document.set_add_prolog(false);
    println!("{}", document.to_xml()?);

    //
    // And to a file
    let path = std::env::temp_dir().join("xmldoc-writer.xml");
    document.write_document(&path)?;
    println!("Written to {}", path.display());

    Ok(())
}
