#![no_main]
use libfuzzer_sys::fuzz_target;
use linear_automation_core::inputs::{input_env_key, ActionInputs};
use std::collections::HashMap;

fuzz_target!(|data: (String, String)| {
    let (name, value) = data;
    let mut env = HashMap::new();
    env.insert(input_env_key(&name), value.clone());
    let inputs = ActionInputs::new(env);

    // required() and optional() must agree, and never return blank values
    match (inputs.optional(&name), inputs.required(&name)) {
        (Some(a), Ok(b)) => {
            assert_eq!(a, b);
            assert!(!a.trim().is_empty());
        }
        (None, Err(_)) => assert!(value.trim().is_empty()),
        _ => panic!("optional and required disagree"),
    }
});
