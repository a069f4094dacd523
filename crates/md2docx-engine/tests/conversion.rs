//! End-to-end conversion tests exercising the full pipeline through the
//! public API.

use std::fs;
use std::path::Path;

use md2docx_engine::progress::ProgressSink;
use md2docx_engine::{ConvertOptions, NullSink, convert_file, convert_str};
use tempfile::TempDir;

// 1x1 transparent PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64,
    0x60, 0xF8, 0x5F, 0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[derive(Default)]
struct CapturingSink {
    progress: Vec<u8>,
    statuses: Vec<String>,
    log: Vec<String>,
}

impl ProgressSink for CapturingSink {
    fn on_progress(&mut self, percent: u8) {
        self.progress.push(percent);
    }

    fn on_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn on_log(&mut self, message: &str) {
        self.log.push(message.to_string());
    }
}

const FULL_DOCUMENT: &str = "\
# Report

Intro with **bold**, *italic*, `code` and a [link](https://example.com).

> A quoted remark.

- first
- second

1. one
2. two

| h1 | h2 |
|----|----|
| v1 | v2 |

```
fn main() {}
```

---

The end.
";

#[test]
fn full_document_converts_to_docx_bytes() {
    let bytes = convert_str(
        FULL_DOCUMENT,
        Path::new("."),
        &ConvertOptions::default(),
        &mut NullSink,
    )
    .unwrap();

    // DOCX is a ZIP container.
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    assert!(bytes.len() > 1000);
}

#[test]
fn convert_file_runs_all_milestones() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.docx");
    fs::write(&input, "# Title\n\nBody text.\n").unwrap();

    let mut sink = CapturingSink::default();
    convert_file(&input, &output, &ConvertOptions::default(), &mut sink).unwrap();

    assert!(output.exists());
    assert_eq!(sink.progress, vec![0, 20, 40, 50, 80, 100]);
    assert_eq!(sink.statuses, vec!["converting", "done"]);
    assert!(sink.log.iter().any(|l| l.contains("conversion finished")));
}

#[test]
fn convert_file_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = convert_file(
        &dir.path().join("absent.md"),
        &dir.path().join("out.docx"),
        &ConvertOptions::default(),
        &mut NullSink,
    );
    assert!(result.is_err());
    assert!(!dir.path().join("out.docx").exists());
}

#[test]
fn local_image_is_embedded_and_missing_one_logged() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.png"), TINY_PNG).unwrap();
    let input = dir.path().join("doc.md");
    fs::write(
        &input,
        "![present](ok.png)\n\n![absent](gone.png)\n\n![remote](https://example.com/r.png)\n",
    )
    .unwrap();
    let output = dir.path().join("doc.docx");

    let mut sink = CapturingSink::default();
    convert_file(&input, &output, &ConvertOptions::default(), &mut sink).unwrap();

    assert!(output.exists());
    let not_found: Vec<&String> = sink
        .log
        .iter()
        .filter(|l| l.contains("image not found"))
        .collect();
    assert_eq!(not_found.len(), 1);
    assert!(not_found[0].contains("gone.png"));
    assert_eq!(
        sink.log
            .iter()
            .filter(|l| l.contains("remote image"))
            .count(),
        1
    );
}
