use crate::error::Result;
use crate::navigation::{PracticeEvent, practice};
use crate::normalize::normalize_search_text;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the practice tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PracticeParams {
    /// Raw search text as typed by the user
    pub search_text: String,

    /// Control key held while triggering; opens a new browsing context (default: false)
    #[serde(default)]
    pub ctrl_key: bool,
}

/// Tool that runs the practice navigation handler
#[derive(Default)]
pub struct PracticeTool;

impl Tool for PracticeTool {
    type Params = PracticeParams;

    fn name(&self) -> &str {
        "practice"
    }

    fn execute_typed(&self, params: PracticeParams, context: &mut ToolContext) -> Result<ToolResult> {
        let event = PracticeEvent::new(params.ctrl_key);

        match practice(&params.search_text, event, context.navigator)? {
            Some(command) => Ok(ToolResult::success_with(serde_json::json!({
                "search_text": params.search_text,
                "normalized": normalize_search_text(&params.search_text),
                "url": command.url(),
                "target": command.target(),
            }))),
            None => Ok(ToolResult::success_with(serde_json::json!({
                "search_text": params.search_text,
                "skipped": true,
            }))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Navigator;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        redirects: RefCell<Vec<String>>,
        opens: RefCell<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn redirect(&self, url: &str) -> Result<()> {
            self.redirects.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn open(&self, url: &str) -> Result<()> {
            self.opens.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_practice_params_default() {
        let params: PracticeParams =
            serde_json::from_value(serde_json::json!({ "search_text": "Abraham Lincoln" })).unwrap();
        assert_eq!(params.search_text, "Abraham Lincoln");
        assert!(!params.ctrl_key);
    }

    #[test]
    fn test_practice_tool_metadata() {
        let tool = PracticeTool;
        assert_eq!(tool.name(), "practice");
        let schema = tool.parameters_schema();
        assert!(schema.is_object());
    }

    #[test]
    fn test_practice_tool_redirect() {
        let recorder = Recorder::default();
        let mut context = ToolContext::new(&recorder);

        let params = PracticeParams { search_text: " Abraham  Lincoln ".to_string(), ctrl_key: false };
        let result = PracticeTool.execute_typed(params, &mut context).unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["normalized"], "Abraham_Lincoln");
        assert_eq!(data["url"], "/practice/Abraham_Lincoln");
        assert_eq!(data["target"], "current");
        assert_eq!(recorder.redirects.borrow().as_slice(), ["/practice/Abraham_Lincoln"]);
        assert!(recorder.opens.borrow().is_empty());
    }

    #[test]
    fn test_practice_tool_new_context() {
        let recorder = Recorder::default();
        let mut context = ToolContext::new(&recorder);

        let params = PracticeParams { search_text: "Some_Topic".to_string(), ctrl_key: true };
        let result = PracticeTool.execute_typed(params, &mut context).unwrap();

        assert_eq!(result.data.unwrap()["target"], "new_context");
        assert!(recorder.redirects.borrow().is_empty());
        assert_eq!(recorder.opens.borrow().as_slice(), ["/practice/Some_Topic"]);
    }

    #[test]
    fn test_practice_tool_skips_empty() {
        let recorder = Recorder::default();
        let mut context = ToolContext::new(&recorder);

        let params = PracticeParams { search_text: "   ".to_string(), ctrl_key: false };
        let result = PracticeTool.execute_typed(params, &mut context).unwrap();

        assert!(result.success);
        assert_eq!(result.data.unwrap()["skipped"], true);
        assert!(recorder.redirects.borrow().is_empty());
        assert!(recorder.opens.borrow().is_empty());
    }
}
