#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Recovery must absorb every input, and the junk it produces must tile back into the source
        let document = ftl::parse(s);
        let _ = ftl::serialize_with_options(&document, ftl::SerializeOptions::new().with_junk(true));
        let _ = ftl::parse_entry(s);
    }
});
