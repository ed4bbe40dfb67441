#![no_main]
use libfuzzer_sys::fuzz_target;
use linear_automation_core::output::commands::escape_data;
use linear_automation_core::output::writer::format_entry;

fuzz_target!(|data: (String, String, String)| {
    let (name, value, delimiter) = data;
    if let Ok(entry) = format_entry(&name, &value, &delimiter) {
        assert!(entry.ends_with(&format!("\n{}\n", delimiter)));
    }

    let escaped = escape_data(&value);
    assert!(!escaped.contains('\n'));
    assert!(!escaped.contains('\r'));
});
