//! XML formatting module
//!
//! Use [`Document::to_xml`] unless you need to write the XML to a file or other writer.
use crate::{
    Document, Node,
    encoding::{TextEncoding, TextSink},
    error::{XmlError, XmlResult},
};
use htmlentity::entity::ICodedDataTrait;
use htmlentity::entity::{CharacterSet, EncodeType, encode};
use std::borrow::Cow;

const TAB: &str = "\t";
const NEWLINE: &str = "\n";

/// Write a document as XML using the given writer.
///
/// The output is:
/// - The `<?xml` declaration, if the document has prolog output enabled
/// - The root node's opening tag, with its attributes
/// - Each descendant in document order; leaves on one line, containers as a nested block
/// - The root node's closing tag
///
/// With newlines disabled, no line breaks or indentation are written at all.
///
/// # Errors
/// Returns an error if the writer fails, or if a value cannot be entity encoded.
pub fn write_xml(writer: &mut dyn std::io::Write, document: &Document) -> XmlResult<()> {
    write_xml_as(writer, document, document.encoding())
}

/// Write a document, encoding the output bytes as `output` rather than the document's own representation.
///
/// The `<?xml` declaration always names the document's representation.
pub(crate) fn write_xml_as(
    writer: &mut dyn std::io::Write,
    document: &Document,
    output: TextEncoding,
) -> XmlResult<()> {
    let layout = Layout {
        new_lines: document.new_lines(),
        escape: document.escape_entities(),
    };

    let mut sink = TextSink::new(writer, output);
    sink.begin()?;

    //
    // Write the XML declaration
    if document.add_prolog() {
        let prolog = document.encoding().prolog(document.version());
        sink.write_str(&format!("{prolog}{newline}", newline = layout.newline()))?;
    }

    //
    // Write the root node. Its value is never written, even with no children
    let root = document.root();
    let open = layout.open_tag(root)?;
    sink.write_str(&format!("{open}{newline}", newline = layout.newline()))?;

    write_children(&mut sink, root, &layout)?;

    sink.write_str(&format!(
        "</{name}>{newline}",
        name = root.name(),
        newline = layout.newline()
    ))?;

    Ok(())
}

fn write_children(sink: &mut TextSink<'_>, root: &Node, layout: &Layout) -> XmlResult<()> {
    let newline = layout.newline();

    let mut stack: Vec<_> = root
        .children()
        .iter()
        .rev()
        .map(|child| (NodeTask::Open(child), 1))
        .collect();
    loop {
        let Some((task, depth)) = stack.pop() else {
            break;
        };
        let tab = layout.indent(depth);

        match task {
            NodeTask::Close(node) => {
                let name = node.name();
                sink.write_str(&format!("{tab}</{name}>{newline}"))?;
            }

            NodeTask::Open(node) => {
                let name = node.name();
                let open = layout.open_tag(node)?;
                tracing::trace!(node = name, depth, leaf = node.is_leaf(), "writing node");

                if node.is_leaf() {
                    let value = layout.text(node.value())?;
                    sink.write_str(&format!("{tab}{open}{value}</{name}>{newline}"))?;
                    continue;
                }

                sink.write_str(&format!("{tab}{open}{newline}"))?;
                stack.push((NodeTask::Close(node), depth));
                for child in node.children().iter().rev() {
                    stack.push((NodeTask::Open(child), depth + 1));
                }
            }
        }
    }

    Ok(())
}

/// Pending work for the writer. Containers are opened, then closed once their children are written.
enum NodeTask<'doc> {
    Open(&'doc Node),
    Close(&'doc Node),
}

/// Formatting switches read from the document for one write.
struct Layout {
    new_lines: bool,
    escape: bool,
}
impl Layout {
    fn newline(&self) -> &'static str {
        if self.new_lines { NEWLINE } else { "" }
    }

    fn indent(&self, depth: usize) -> String {
        if self.new_lines {
            TAB.repeat(depth)
        } else {
            String::new()
        }
    }

    /// `<name attr="value" ...>`
    fn open_tag(&self, node: &Node) -> XmlResult<String> {
        let mut tag = format!("<{}", node.name());
        for attr in node.attributes() {
            let value = self.text(attr.value())?;
            tag.push_str(&format!(r#" {name}="{value}""#, name = attr.name()));
        }
        tag.push('>');
        Ok(tag)
    }

    fn text<'a>(&self, value: &'a str) -> XmlResult<Cow<'a, str>> {
        if self.escape {
            encode_entities(value).map(Cow::Owned)
        } else {
            Ok(Cow::Borrowed(value))
        }
    }
}

fn encode_entities(input: &str) -> XmlResult<String> {
    encode(
        input.as_bytes(),
        &EncodeType::NamedOrHex,
        &CharacterSet::SpecialChars,
    )
    .to_string()
    .map_err(|e| XmlError::Encode(e.to_string()))
}
