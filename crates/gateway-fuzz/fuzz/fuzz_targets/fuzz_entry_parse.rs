#![no_main]

use arxiv_gateway::feed::parse_entry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Wrap arbitrary children in an Atom entry so the field matching is exercised
    let body = String::from_utf8_lossy(data);
    let xml = format!(r#"<entry xmlns="http://www.w3.org/2005/Atom">{body}</entry>"#);
    if let Ok(record) = parse_entry(&xml) {
        assert!(!record.paper_id.contains('/'));
        assert!(record.pdf_url.ends_with(".pdf"));
    }
});
