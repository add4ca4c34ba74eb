#![no_main]
use libfuzzer_sys::fuzz_target;
use todolite::todo::{QueryOptions, TodoQueryParams, build_query};

fuzz_target!(|data: &[u8]| {
    if data.len() > 8192 { return; }
    let Ok(s) = std::str::from_utf8(data) else { return };
    // Treat input as a raw query string: k=v&k=v
    let pairs = s.split('&').filter_map(|kv| kv.split_once('='));
    let params = TodoQueryParams::from_pairs(pairs);
    // Must return a validation error or a query, never panic
    let _ = build_query(&params, &QueryOptions::default());
});
