//! Property-based tests for the Atom entry parser.

use proptest::prelude::*;
use arxiv_gateway::feed::{parse_entry, parse_feed};

fn entry_xml(id: &str, title: Option<&str>, authors: &[Option<String>]) -> String {
    let mut xml = format!(r#"<entry xmlns="http://www.w3.org/2005/Atom"><id>{id}</id>"#);
    if let Some(title) = title {
        xml.push_str(&format!("<title>{title}</title>"));
    }
    for author in authors {
        match author {
            Some(name) => xml.push_str(&format!("<author><name>{name}</name></author>")),
            None => xml.push_str("<author><uri>http://example.org</uri></author>"),
        }
    }
    xml.push_str("</entry>");
    xml
}

proptest! {
    /// paper_id is whatever follows the last slash of the id URL.
    #[test]
    fn paper_id_is_trailing_segment(
        prefix in "(http://arxiv\\.org/abs/|https://arxiv\\.org/abs/[a-z\\-]{1,8}/)",
        id in "[0-9]{4}\\.[0-9]{4,5}(v[0-9]{1,2})?",
    ) {
        let record = parse_entry(&entry_xml(&format!("{prefix}{id}"), Some("T"), &[])).unwrap();
        prop_assert_eq!(&record.paper_id, &id);
        prop_assert_eq!(record.pdf_url, format!("https://arxiv.org/pdf/{id}.pdf"));
    }

    /// Nameless authors drop out; named ones keep their relative order.
    #[test]
    fn nameless_authors_are_skipped_in_order(
        authors in proptest::collection::vec(proptest::option::of("[A-Z][a-z]{1,10} [A-Z][a-z]{1,10}"), 0..8),
    ) {
        let record = parse_entry(&entry_xml("http://arxiv.org/abs/1", Some("T"), &authors)).unwrap();
        let expected: Vec<&str> = authors.iter().flatten().map(String::as_str).collect();
        prop_assert_eq!(record.authors, expected.join(", "));
    }

    /// A missing title is an empty string, never an error.
    #[test]
    fn missing_title_is_empty(title in proptest::option::of("[A-Za-z0-9 ]{1,40}")) {
        let record = parse_entry(&entry_xml("http://arxiv.org/abs/1", title.as_deref(), &[])).unwrap();
        prop_assert_eq!(record.title, title.unwrap_or_default());
    }

    /// Arbitrary input never panics, it parses or fails.
    #[test]
    fn parse_feed_never_panics(input in ".*") {
        let _ = parse_feed(&input);
    }

    /// Any number of entries comes back in document order.
    #[test]
    fn feed_preserves_entry_order(count in 0usize..12) {
        let entries: String = (0..count)
            .map(|i| format!("<entry><id>http://arxiv.org/abs/{i}</id><title>Paper {i}</title></entry>"))
            .collect();
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{entries}</feed>"#);

        let records = parse_feed(&xml).unwrap();
        prop_assert_eq!(records.len(), count);
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&record.paper_id, &i.to_string());
        }
    }
}
