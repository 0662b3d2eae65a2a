//! Rendering of a traversal for the command-line tool

use crate::bucket::PriorityBucket;
use crate::config::OutputFormat;
use crate::error::BucketResult;

/// Render the bucket's traversal in the requested format
///
/// - `Text`: one value per line, each line newline-terminated
/// - `Json`: a single JSON array of strings followed by a newline
pub fn render<S: AsRef<str>>(
    bucket: &PriorityBucket<S>,
    format: OutputFormat,
) -> BucketResult<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut out = String::new();
            bucket.each(|value| {
                out.push_str(value.as_ref());
                out.push('\n');
            });
            out
        }
        OutputFormat::Json => {
            let values: Vec<&str> = bucket.iter().map(|value| value.as_ref()).collect();
            let mut out = serde_json::to_string(&values)?;
            out.push('\n');
            out
        }
    };

    tracing::debug!(
        format = ?format,
        values = bucket.len(),
        bytes = rendered.len(),
        "Rendered traversal"
    );

    Ok(rendered)
}
