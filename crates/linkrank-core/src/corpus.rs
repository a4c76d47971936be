//! Corpus crawling: build a link graph from a directory of HTML pages

use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

lazy_static! {
    static ref HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Parse a directory of HTML pages and build the link graph.
///
/// Each `.html` file becomes a page named after the file. Anchor targets
/// are read from `href` attributes; self-links and links to files outside
/// the corpus are dropped so the returned graph satisfies the invariants
/// the ranking code relies on.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    if !dir.is_dir() {
        return Err(LinkRankError::CorpusNotFound(dir.display().to_string()));
    }

    let mut raw_links: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".html") {
            continue;
        }

        let contents = fs::read_to_string(entry.path())?;
        let targets: Vec<String> = HREF_RE
            .captures_iter(&contents)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        debug!(page = %name, links = targets.len(), "scanned corpus page");
        raw_links.insert(name, targets);
    }

    if raw_links.is_empty() {
        return Err(LinkRankError::EmptyCorpus(dir.display().to_string()));
    }

    let mut graph = LinkGraph::new();
    for page in raw_links.keys() {
        graph.add_page(page.clone());
    }
    for (page, targets) in &raw_links {
        for target in targets {
            // add_link drops self-links and out-of-corpus targets
            graph.add_link(page, target);
        }
    }

    debug!(pages = graph.len(), "corpus crawl complete");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_corpus(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_crawl_extracts_links() {
        let dir = write_corpus(&[
            (
                "1.html",
                r#"<html><body><a href="2.html">two</a> <a href="3.html">three</a></body></html>"#,
            ),
            ("2.html", r#"<a class="nav" href="3.html">three</a>"#),
            ("3.html", "<html><body>no links</body></html>"),
        ]);

        let graph = crawl(dir.path()).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.links("1.html").unwrap().len(), 2);
        assert_eq!(graph.links("2.html").unwrap().len(), 1);
        assert!(graph.links("3.html").unwrap().is_empty());
    }

    #[test]
    fn test_crawl_filters_external_and_self_links() {
        let dir = write_corpus(&[
            (
                "a.html",
                r#"<a href="a.html">self</a> <a href="https://example.com/x.html">out</a> <a href="b.html">b</a>"#,
            ),
            ("b.html", ""),
        ]);

        let graph = crawl(dir.path()).unwrap();
        let links = graph.links("a.html").unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.contains("b.html"));
    }

    #[test]
    fn test_crawl_ignores_non_html() {
        let dir = write_corpus(&[("a.html", ""), ("notes.txt", "ignored"), ("b.html", "")]);
        let graph = crawl(dir.path()).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(!graph.contains("notes.txt"));
    }

    #[test]
    fn test_crawl_missing_directory() {
        let err = crawl(Path::new("/nonexistent/corpus")).unwrap_err();
        assert!(matches!(err, LinkRankError::CorpusNotFound(_)));
    }

    #[test]
    fn test_crawl_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let err = crawl(dir.path()).unwrap_err();
        assert!(matches!(err, LinkRankError::EmptyCorpus(_)));
    }
}
