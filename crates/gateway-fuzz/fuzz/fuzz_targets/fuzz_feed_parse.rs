#![no_main]

use arxiv_gateway::feed::parse_feed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = parse_feed(xml);
    }
});
