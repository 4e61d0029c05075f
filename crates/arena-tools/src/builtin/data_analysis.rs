use arena_core::{Error, ParamKind, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::{Value, json};

/// Basic summaries and statistics over provided data.
pub struct DataAnalysisTool;

impl DataAnalysisTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DataAnalysisTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DataAnalysisTool {
    fn name(&self) -> &str {
        "data_analysis"
    }

    fn description(&self) -> &str {
        "Perform basic data analysis on provided data"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(
                "operation",
                ParamKind::String,
                "One of: summarize, statistics",
            )
            .param("data", ParamKind::Object, "Data to analyze: text or a list")
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let operation = args["operation"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'operation' parameter"))?;
        let data = &args["data"];

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            operation = %operation,
            "Data analysis operation"
        );

        match operation {
            "summarize" => Ok(summarize(data)),
            "statistics" => Ok(statistics(data)),
            other => Err(Error::message(format!(
                "Unsupported data operation: {other}"
            ))),
        }
    }
}

fn summarize(data: &Value) -> Value {
    match data {
        Value::String(text) => {
            let words = text.split_whitespace().count();
            let chars = text.chars().count();
            let lines = text.split('\n').count();
            json!(format!(
                "Text summary: {words} words, {chars} characters, {lines} lines"
            ))
        }
        Value::Array(items) => json!(format!("List summary: {} items", items.len())),
        other => json!(format!("Data type: {}", type_name(other))),
    }
}

fn statistics(data: &Value) -> Value {
    let Some(items) = data.as_array() else {
        return json!("Statistics only available for numeric lists");
    };

    let numbers: Vec<f64> = items.iter().filter_map(Value::as_f64).collect();
    if numbers.is_empty() || numbers.len() != items.len() {
        return json!("Statistics only available for numeric lists");
    }

    let count = numbers.len();
    let mean = numbers.iter().sum::<f64>() / count as f64;
    let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut sorted = numbers.clone();
    sorted.sort_by(f64::total_cmp);
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    json!({
        "count": count,
        "mean": mean,
        "median": median,
        "min": min,
        "max": max,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
