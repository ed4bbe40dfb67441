#![no_main]
use linear_automation_core::extract_issue_id;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Total over any input, and matches always re-extract from canonical form
        if let Some(id) = extract_issue_id(s) {
            let canonical = format!("feature/{}", id);
            assert_eq!(extract_issue_id(&canonical).as_ref(), Some(&id));
        }
        let _ = extract_issue_id(&format!("feature/{}", s));
    }
});
