#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode → render must not panic at any step.
        if let Ok(record) = studio_invoice::json::from_json(s) {
            let _ = studio_invoice::html::generate_invoice_html(&record);
        }
    }
});
