//! Plain text from `.docx` uploads: the text runs of `word/document.xml`.
//!
//! Paragraph ends and `<w:br/>` become newlines, `<w:tab/>` becomes a tab.
//! Styling, tables and headers/footers are not interpreted.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const DOCUMENT_PART: &str = "word/document.xml";

/// Cap on the decompressed document part.
const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a valid DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("could not read {DOCUMENT_PART}: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub fn extract_docx_text(data: &[u8]) -> Result<String, DocxError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut part = archive.by_name(DOCUMENT_PART)?;

    let mut xml = String::new();
    part.by_ref()
        .take(MAX_DOCUMENT_XML_BYTES)
        .read_to_string(&mut xml)?;

    document_text(&xml)
}

fn document_text(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

/// Builds a minimal `.docx` with one paragraph per entry.
#[cfg(test)]
pub(crate) fn minimal_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    writer.start_file(DOCUMENT_PART, options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        let data = minimal_docx(&["Jane Doe", "Backend Engineer &amp; SRE"]);
        let text = extract_docx_text(&data).unwrap();
        assert_eq!(text, "Jane Doe\nBackend Engineer & SRE\n");
    }

    #[test]
    fn test_runs_tabs_and_breaks() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p>
            <w:r><w:t>Go</w:t></w:r><w:r><w:tab/><w:t>5 years</w:t></w:r>
            <w:r><w:br/><w:t>Kubernetes</w:t></w:r>
            <w:pPr><w:rPr>ignored</w:rPr></w:pPr>
        </w:p></w:body></w:document>"#;
        assert_eq!(document_text(xml).unwrap(), "Go\t5 years\nKubernetes\n");
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        use std::io::Write;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("notes.txt", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_docx_text(&data),
            Err(DocxError::Archive(_))
        ));
    }

    #[test]
    fn test_non_zip_bytes_fail() {
        assert!(extract_docx_text(b"PK\x03\x04 truncated").is_err());
    }
}
