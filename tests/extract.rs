use std::path::{Path, PathBuf};

use tagscan::html::{parse_document, scan, Node};
use tagscan::{Error, Extractor, Queries};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(paths: &[PathBuf]) -> (tagscan::Result<usize>, String) {
    let mut out = Vec::new();
    let result = Extractor::new(Queries::default()).process_files(paths, &mut out);

    (result, String::from_utf8(out).unwrap())
}

#[test]
fn example_prints_title_and_first_paragraph_only() {
    let (result, report) = run(&[fixture("example.html")]);

    assert_eq!(result.unwrap(), 2);
    assert_eq!(report, "<title>\nExample\n\n<p>\nHello\n\n");
    assert!(!report.contains("code"));
}

#[test]
fn formatted_post_picks_first_block_in_container() {
    let (result, report) = run(&[fixture("post.html")]);

    assert_eq!(result.unwrap(), 2);
    assert_eq!(
        report,
        "<title>\nNotes on naive parsing\n\n<pre>\nfn main() {}\n\n"
    );
}

#[test]
fn files_are_processed_in_order() {
    let (result, report) = run(&[fixture("post.html"), fixture("example.html")]);

    assert_eq!(result.unwrap(), 4);
    let titles: Vec<&str> = report.lines().filter(|line| *line == "<title>").collect();
    assert_eq!(titles.len(), 2);
    assert!(report.find("Notes on naive parsing").unwrap() < report.find("Example").unwrap());
}

#[test]
fn untagged_file_prints_nothing() {
    let (result, report) = run(&[fixture("plain.txt")]);

    assert_eq!(result.unwrap(), 0);
    assert!(report.is_empty());
}

#[test]
fn unreadable_file_aborts_the_batch() {
    let missing = fixture("does-not-exist.html");
    let (result, report) = run(&[
        fixture("example.html"),
        missing.clone(),
        fixture("post.html"),
    ]);

    match result {
        Err(Error::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected read error, got {other:?}"),
    }
    assert_eq!(report, "<title>\nExample\n\n<p>\nHello\n\n");
}

#[test]
fn post_tree_shape_follows_naive_nesting() {
    let markup = std::fs::read_to_string(fixture("post.html")).unwrap();

    let root = parse_document(scan(&markup)).unwrap();

    assert_eq!(root.tag, "<!DOCTYPE html>");
    assert_eq!(root.closing_tag, None);

    // `<meta>` is never closed, so `</head>` ends it, `<body>` lands inside
    // `<head>`, and `</html>` ends `<head>`, leaving `<html>` open.
    let html = root.elements().next().unwrap();
    assert_eq!(html.tag, "<html>");
    assert_eq!(html.closing_tag, None);

    let head = html.elements().next().unwrap();
    assert_eq!(head.closing_tag.as_deref(), Some("</html>"));

    let meta = head.elements().next().unwrap();
    assert_eq!(meta.tag, r#"<meta charset="utf-8">"#);
    assert_eq!(meta.closing_tag.as_deref(), Some("</head>"));
    assert!(meta.children.contains(&Node::Text("\n".to_owned())));

    let body = head.elements().nth(1).unwrap();
    assert_eq!(body.tag, "<body>");
    assert_eq!(body.closing_tag.as_deref(), Some("</body>"));
}
