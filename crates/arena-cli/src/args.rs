//! Trailing preset-argument parsing

use arena_server::PresetArgs;
use serde_json::{Value, json};

/// Parse trailing `--key value` pairs into preset arguments.
///
/// Keys lose their leading dashes and internal dashes become underscores
/// only on lookup, so `--base-path` stays `base-path`. A flag without a
/// value becomes `true`; "true"/"false" become booleans and all-digit
/// values become integers.
pub fn parse_extra_args(args: &[String]) -> PresetArgs {
    let mut parsed = PresetArgs::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if let Some(key) = arg.strip_prefix("--") {
            let key = key.to_string();
            if i + 1 < args.len() && !args[i + 1].starts_with("--") {
                parsed.insert(key, coerce(&args[i + 1]));
                i += 2;
            } else {
                parsed.insert(key, json!(true));
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    parsed
}

fn coerce(value: &str) -> Value {
    match value.to_ascii_lowercase().as_str() {
        "true" => return json!(true),
        "false" => return json!(false),
        _ => {}
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(number) = value.parse::<i64>() {
            return json!(number);
        }
    }
    json!(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_pairs() {
        let args: Vec<String> = ["--host", "0.0.0.0", "--port", "9000"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_extra_args(&args);

        assert_eq!(parsed["host"], json!("0.0.0.0"));
        assert_eq!(parsed["port"], json!(9000));
    }

    #[test]
    fn test_bool_coercion() {
        let args: Vec<String> = ["--readonly", "True", "--cache", "false"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_extra_args(&args);

        assert_eq!(parsed["readonly"], json!(true));
        assert_eq!(parsed["cache"], json!(false));
    }

    #[test]
    fn test_bare_flag_is_true() {
        let args: Vec<String> = ["--verbose-schema", "--port", "8001"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_extra_args(&args);

        assert_eq!(parsed["verbose-schema"], json!(true));
        assert_eq!(parsed["port"], json!(8001));
    }

    #[test]
    fn test_stray_positional_skipped() {
        let args: Vec<String> = ["oops", "--host", "localhost"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_extra_args(&args);

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["host"], json!("localhost"));
    }
}
