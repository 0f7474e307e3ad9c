use xmldoc::{Document, Node};

/// A small bookstore, shared by the integration tests.
pub fn bookstore() -> Document {
    let mut root = Node::new("bookstore");
    root.add_attribute("name", "Corner Books");

    let dune = root.emplace_child(Node::new("book"));
    dune.add_attribute("category", "fiction");
    dune.add_attribute("id", "1");
    dune.emplace_child(Node::with_value("title", "Dune"))
        .add_attribute("lang", "en");
    dune.emplace_child(Node::with_value("author", "Frank Herbert"));
    dune.emplace_child(Node::with_value("year", "1965"));

    let mut cosmos = Node::new("book");
    cosmos.add_attribute("category", "science");
    cosmos.add_attribute("id", "2");
    cosmos
        .emplace_child(Node::with_value("title", "Cosmos"))
        .add_attribute("lang", "en");
    cosmos
        .emplace_child(Node::new("authors"))
        .emplace_child(Node::with_value("author", "Carl Sagan"));
    cosmos.emplace_child(Node::with_value("year", "1980"));
    root.add_child(&cosmos);

    root.emplace_child(Node::with_value("note", "Open daily"));

    Document::new(root, "1.0")
}
