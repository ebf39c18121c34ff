//! Named event handlers
//!
//! Every handler is a [`Tool`]: it has a name, a typed parameter struct with
//! a JSON schema, and runs against a [`ToolContext`]. Tools are registered in
//! a [`ToolRegistry`] and invoked by name with JSON parameters, which is how a
//! UI event (or any other front end) is wired to the practice handler.

pub mod normalize;
pub mod practice;

pub use normalize::{NormalizeParams, NormalizeTool};
pub use practice::{PracticeParams, PracticeTool};

use crate::error::{BrowserError, Result};
use crate::navigation::Navigator;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Execution context handed to every tool
pub struct ToolContext<'a> {
    /// Where navigation commands are dispatched
    pub navigator: &'a dyn Navigator,
}

impl<'a> ToolContext<'a> {
    pub fn new(navigator: &'a dyn Navigator) -> Self {
        Self { navigator }
    }
}

/// Outcome of a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success() -> Self {
        Self { success: true, data: None, error: None }
    }

    pub fn success_with(data: Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

/// A handler with typed parameters
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    /// JSON schema describing [`Tool::Params`]
    fn parameters_schema(&self) -> Value {
        schemars::schema_for!(Self::Params).to_value()
    }

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;
}

/// Object-safe view of a [`Tool`], used by the registry
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;

    fn parameters_schema(&self) -> Value;

    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn parameters_schema(&self) -> Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed = serde_json::from_value(params).map_err(|e| BrowserError::InvalidParams {
            tool: Tool::name(self).to_string(),
            reason: e.to_string(),
        })?;
        self.execute_typed(typed, context)
    }
}

/// Registry of tools, kept in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the practice and normalize tools
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PracticeTool);
        registry.register(NormalizeTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = Tool::name(&tool).to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_some() {
            log::debug!("Replaced tool '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn DynTool> {
        self.tools.get(name).map(|tool| &**tool)
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of registered tools in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| BrowserError::ToolNotFound(name.to_string()))?;
        tool.execute(params, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopNavigator;

    impl Navigator for NoopNavigator {
        fn redirect(&self, _url: &str) -> Result<()> {
            Ok(())
        }

        fn open(&self, _url: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_defaults() {
        let registry = ToolRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["practice", "normalize"]);
        assert!(registry.has("practice"));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registry_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        registry.register(PracticeTool);
        registry.register(PracticeTool);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_unknown_tool() {
        let registry = ToolRegistry::with_defaults();
        let navigator = NoopNavigator;
        let mut context = ToolContext::new(&navigator);

        let result = registry.execute("search", serde_json::json!({}), &mut context);
        assert!(matches!(result, Err(BrowserError::ToolNotFound(name)) if name == "search"));
    }

    #[test]
    fn test_registry_invalid_params() {
        let registry = ToolRegistry::with_defaults();
        let navigator = NoopNavigator;
        let mut context = ToolContext::new(&navigator);

        let result = registry.execute("practice", serde_json::json!({ "ctrl_key": true }), &mut context);
        assert!(matches!(result, Err(BrowserError::InvalidParams { tool, .. }) if tool == "practice"));
    }

    #[test]
    fn test_tool_result_serialization() {
        let json = serde_json::to_value(ToolResult::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));

        let json = serde_json::to_value(ToolResult::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }
}
