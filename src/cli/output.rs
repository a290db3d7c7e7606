//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexpackArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Suggestion;

/// Result structure for a corrected word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub original: String,
    pub corrected: String,
}

/// Result structure for a word's ranked candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesOutput {
    pub original: String,
    pub candidates: Vec<Suggestion>,
}

/// Result structure for query preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutput {
    pub query: String,
    pub corrected: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexpackArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexpackArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexpackArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Render a result as JSON, compact or pretty.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Lines of human output: one per object entry or array element.
pub fn human_lines(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect(),
        _ => vec![format_value(value)],
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_human_lines_for_map() {
        let mut lists = BTreeMap::new();
        lists.insert("a".to_string(), vec![5u64, 25]);
        lists.insert("b".to_string(), vec![7u64]);

        let value = serde_json::to_value(&lists).unwrap();
        assert_eq!(human_lines(&value), vec!["a: 5, 25", "b: 7"]);
    }

    #[test]
    fn test_human_lines_for_corrections() {
        let corrections = vec![CorrectionOutput {
            original: "aple".to_string(),
            corrected: "apple".to_string(),
        }];

        let value = serde_json::to_value(&corrections).unwrap();
        assert_eq!(human_lines(&value), vec!["corrected=apple original=aple"]);
    }

    #[test]
    fn test_render_json() {
        let output = QueryOutput {
            query: "aple pie".to_string(),
            corrected: vec!["apple".to_string(), "pie".to_string()],
        };

        let compact = render_json(&output, false).unwrap();
        assert_eq!(compact, r#"{"query":"aple pie","corrected":["apple","pie"]}"#);

        let pretty = render_json(&output, true).unwrap();
        assert!(pretty.contains('\n'));
        let parsed: QueryOutput = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, output);
    }
}
