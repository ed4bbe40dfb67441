#![no_main]
use linear_automation_core::IssueId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(id) = s.parse::<IssueId>() {
            let reparsed: IssueId = id.to_string().parse().expect("canonical form parses");
            assert_eq!(reparsed, id);
        }
    }
});
