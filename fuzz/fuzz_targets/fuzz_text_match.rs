#![no_main]
use libfuzzer_sys::fuzz_target;
use todolite::query::{Filter, eval_filter};

fuzz_target!(|data: &[u8]| {
    if data.len() > 8192 { return; }
    let Ok(needle) = std::str::from_utf8(data) else { return };
    let Ok(filter) = Filter::text_match("body", needle) else { return };
    let doc = bson::doc! {"body": needle};
    // Escaped needle always finds itself
    assert!(eval_filter(&doc, &filter));
    let _ = eval_filter(&bson::doc! {"body": "UMM homework"}, &filter);
});
