use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::html::{findall, parse_document, scan, ElementNode, Pattern};

pub const DEFAULT_TITLE: &str = "<title>";
pub const DEFAULT_CONTAINER: &str = r#"<div id="c1">"#;
pub const DEFAULT_CONTENT: &str = "<pre>|<p>";

/// The three tag patterns run against every document.
#[derive(Clone, Debug)]
pub struct Queries {
    pub title: Pattern,
    pub container: Pattern,
    /// Searched for inside the container match only.
    pub content: Pattern,
}

impl Default for Queries {
    fn default() -> Queries {
        Queries {
            title: Pattern::literal(DEFAULT_TITLE),
            container: Pattern::literal(DEFAULT_CONTAINER),
            content: Pattern::any_of(&["<pre>", "<p>"]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extract {
    pub tag: String,
    pub text: String,
}

impl Extract {
    pub fn from_node(node: &ElementNode) -> Extract {
        Extract {
            tag: node.tag.clone(),
            text: node.text_content(),
        }
    }
}

/// Title match first, then the content match found inside the container.
pub fn extract(root: &ElementNode, queries: &Queries) -> Vec<Extract> {
    let mut extracts = Vec::new();

    findall(&queries.title, root, |node| {
        extracts.push(Extract::from_node(node))
    });

    findall(&queries.container, root, |container| {
        findall(&queries.content, container, |node| {
            extracts.push(Extract::from_node(node))
        });
    });

    extracts
}

pub fn extract_source(markup: &str, queries: &Queries) -> Vec<Extract> {
    match document(markup) {
        Some(document) => extract(&document, queries),
        None => Vec::new(),
    }
}

fn document(markup: &str) -> Option<ElementNode> {
    let document = parse_document(scan(markup));
    if document.is_none() {
        tracing::warn!("document has no tags");
    }

    document
}

/// Tag line, text line, blank separator.
pub fn write_extract(out: &mut impl Write, extract: &Extract) -> Result<()> {
    writeln!(out, "{}", extract.tag).map_err(Error::Write)?;
    writeln!(out, "{}", extract.text).map_err(Error::Write)?;
    writeln!(out).map_err(Error::Write)?;

    Ok(())
}

pub struct Extractor {
    pub queries: Queries,
    pub dump_tree: bool,
}

impl Extractor {
    pub fn new(queries: Queries) -> Extractor {
        Extractor {
            queries,
            dump_tree: false,
        }
    }

    pub fn process_source(&self, markup: &str, out: &mut impl Write) -> Result<usize> {
        let Some(document) = document(markup) else {
            return Ok(0);
        };

        if self.dump_tree {
            writeln!(out, "{:#?}", document).map_err(Error::Write)?;
        }

        let extracts = extract(&document, &self.queries);
        for extract in &extracts {
            write_extract(out, extract)?;
        }

        Ok(extracts.len())
    }

    pub fn process_file(&self, path: &Path, out: &mut impl Write) -> Result<usize> {
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let markup = String::from_utf8_lossy(&bytes);

        let found = self.process_source(&markup, out)?;
        tracing::info!(path = %path.display(), found, "processed file");

        Ok(found)
    }

    /// Stops at the first file that cannot be read; whatever was already
    /// written for earlier files stays written.
    pub fn process_files<P: AsRef<Path>>(&self, paths: &[P], out: &mut impl Write) -> Result<usize> {
        let mut found = 0;

        for path in paths {
            found += self.process_file(path.as_ref(), out)?;
        }

        Ok(found)
    }
}
