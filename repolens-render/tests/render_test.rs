//! End-to-end rendering of analysed snapshots

use repolens_core::{parse_timestamp, AnalysisResult, Analyzer, RawSnapshot, UserContext};
use repolens_render::{generate_all, DocumentRenderer, DocumentSet, PageKey};

fn fixture_analysis() -> AnalysisResult {
    let snapshot = RawSnapshot::from_json_str(include_str!("../../repolens-core/tests/fixtures/snapshot.json")).unwrap();
    Analyzer::at(parse_timestamp("2024-06-15").unwrap()).analyze(&snapshot, &UserContext::new())
}

fn hostile_analysis() -> AnalysisResult {
    let snapshot = RawSnapshot::from_json_str(
        r#"{
            "owner": "evil",
            "repo": "x",
            "meta": {
                "name": "<script>alert(1)</script>",
                "full_name": "evil/\"quoted\"",
                "description": "Fish & <b>chips</b>",
                "topics": ["<img>"]
            }
        }"#,
    )
    .unwrap();
    Analyzer::at(parse_timestamp("2024-06-15").unwrap()).analyze(&snapshot, &UserContext::new())
}

#[test]
fn test_every_document_has_its_marker() {
    let documents = generate_all(&fixture_analysis());
    assert_eq!(documents.len(), 5);

    for (key, html) in documents.iter() {
        let marker = format!("{} Perspective", key.label());
        assert!(html.contains(&marker), "{key} is missing '{marker}'");
    }
}

#[test]
fn test_every_document_links_to_the_others() {
    let documents = generate_all(&fixture_analysis());

    for (key, html) in documents.iter() {
        for other in PageKey::all().into_iter().filter(|other| *other != key) {
            let href = format!("href=\"./{}\"", other.file_name());
            assert!(html.contains(&href), "{key} does not link to {other}");
        }
    }
}

#[test]
fn test_interpolated_values_are_escaped() {
    let documents = generate_all(&hostile_analysis());

    for (key, html) in documents.iter() {
        assert!(!html.contains("<script>alert(1)</script>"), "{key} leaks the raw name");
        assert!(!html.contains("<b>chips</b>"), "{key} leaks raw description markup");
        assert!(!html.contains("<img>"), "{key} leaks a raw topic");
    }

    let hub = documents.get(PageKey::Index).unwrap();
    assert!(hub.contains("evil/&quot;quoted&quot;"));
    assert!(hub.contains("Fish &amp; &lt;b&gt;chips&lt;/b&gt;"));
    assert!(documents
        .get(PageKey::Product)
        .unwrap()
        .contains("&lt;script&gt;alert(1)&lt;/script&gt; as User Value"));
}

#[test]
fn test_rendering_is_byte_identical() {
    let analysis = fixture_analysis();
    let renderer = DocumentRenderer::new();
    assert_eq!(renderer.generate_all(&analysis), renderer.generate_all(&analysis));

    let again = fixture_analysis();
    assert_eq!(renderer.generate(PageKey::Capability, &analysis), renderer.generate(PageKey::Capability, &again));
}

#[test]
fn test_empty_snapshot_renders_every_document() {
    let analysis = Analyzer::at(parse_timestamp("2024-06-15").unwrap())
        .analyze(&RawSnapshot::default(), &UserContext::new());
    let documents = generate_all(&analysis);

    let engineering = documents.get(PageKey::Engineering).unwrap();
    assert!(engineering.contains("data-copy-id=\"cmd-0\""));
    assert!(engineering.contains("<h4>Unknown</h4>"));
    assert!(documents.get(PageKey::Executive).unwrap().contains("<h3>Unknown</h3>"));
    assert!(documents.get(PageKey::Index).unwrap().contains("No topics published for this repository."));
}

#[test]
fn test_write_to_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = temp_dir.path().join("site");
    let documents = generate_all(&fixture_analysis());

    let written = documents.write_to_dir(&out_dir).unwrap();
    assert_eq!(written.len(), 5);

    for key in PageKey::all() {
        let path = out_dir.join(DocumentSet::file_name(key));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, documents.get(key).unwrap());
    }
}
