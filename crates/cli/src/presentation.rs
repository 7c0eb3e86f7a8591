// crates/cli/src/presentation.rs
use std::fmt::Write;

use changed_files_domain::AggregateResult;
use changed_files_infra::format_records;
use changed_files_shared_kernel::Result;
use changed_files_usecase::output_records;

use crate::value_enum::OutputFormat;

/// Render `result` for stdout.
pub fn render(result: &AggregateResult, format: OutputFormat, files_key: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, files_key)),
        OutputFormat::Json => render_json(result),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => render_yaml(result),
    }
}

fn render_text(result: &AggregateResult, files_key: &str) -> String {
    let mut out = String::new();
    for per_pattern in result.patterns() {
        let _ = writeln!(out, "{per_pattern}");
    }
    out.push_str(&format_records(&output_records(result, files_key)));
    out
}

fn render_json(result: &AggregateResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

#[cfg(feature = "yaml")]
fn render_yaml(result: &AggregateResult) -> Result<String> {
    Ok(serde_yaml::to_string(result)?)
}
