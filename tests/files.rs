use xmldoc::{Document, Node, TextEncoding, XmlError};

mod common;

const CMP: &str = include_str!("good.xml");

#[test]
fn test_write_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookstore.xml");

    common::bookstore().write_document(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), CMP);
}

#[test]
fn test_write_document_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    std::fs::write(&path, "x".repeat(4096)).unwrap();

    let document = Document::new(Node::new("r"), "1.0").with_add_prolog(false);
    document.write_document(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<r>\n</r>\n");
}

#[test]
fn test_write_document_utf16() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.xml");

    let document = common::bookstore().with_encoding(TextEncoding::Utf16);
    document.write_document(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xFE]);

    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16(&units).unwrap();
    assert_eq!(text, CMP.replace("UTF-8", "UTF-16"));
}

#[test]
fn test_write_document_bad_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.xml");

    let err = common::bookstore().write_document(&path).unwrap_err();
    match err {
        XmlError::FailedToOpen { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("Expected FailedToOpen, got {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_read_document_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing.xml");

    let err = Document::read_document(&path).unwrap_err();
    assert!(matches!(err, XmlError::FailedToOpen { .. }));
}

#[test]
fn test_read_document_not_implemented() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookstore.xml");
    common::bookstore().write_document(&path).unwrap();

    let err = Document::read_document(&path).unwrap_err();
    assert!(matches!(err, XmlError::NotImplemented(_)));
}
