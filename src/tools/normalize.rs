use crate::error::Result;
use crate::navigation::practice_url;
use crate::normalize::normalize_search_text;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the normalize tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NormalizeParams {
    /// Raw search text to normalize
    pub search_text: String,
}

/// Tool that previews normalization without navigating
#[derive(Default)]
pub struct NormalizeTool;

impl Tool for NormalizeTool {
    type Params = NormalizeParams;

    fn name(&self) -> &str {
        "normalize"
    }

    fn execute_typed(&self, params: NormalizeParams, _context: &mut ToolContext) -> Result<ToolResult> {
        let normalized = normalize_search_text(&params.search_text);
        let url = (!normalized.is_empty()).then(|| practice_url(&normalized));

        Ok(ToolResult::success_with(serde_json::json!({
            "search_text": params.search_text,
            "normalized": normalized,
            "url": url,
        })))
    }
}
