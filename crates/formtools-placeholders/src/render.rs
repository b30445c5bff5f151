//! Field rendering seam.

use crate::error::Result;
use crate::source::{FieldDefinition, FieldType};
use async_trait::async_trait;
use formtools_core::{FormId, SubmissionId};
use std::collections::HashMap;

/// Context tag for values rendered into email templates.
pub const EMAIL_TEMPLATE_CONTEXT: &str = "email_template";

/// Everything a renderer may need to display one stored value.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Form the value belongs to
    pub form_id: FormId,
    /// Submission the value belongs to
    pub submission_id: SubmissionId,
    /// Raw stored value
    pub value: &'a str,
    /// The field's full definition; `None` if the form no longer lists it
    pub field: Option<&'a FieldDefinition>,
    /// The field type catalogue
    pub field_types: &'a [FieldType],
    /// Global settings
    pub settings: &'a HashMap<String, String>,
    /// Where the output goes (e.g. [`EMAIL_TEMPLATE_CONTEXT`])
    pub context: &'a str,
}

/// Turns a raw field value into display text.
#[async_trait]
pub trait FieldRenderer: Send + Sync {
    /// Render one value.
    async fn render(&self, request: RenderRequest<'_>) -> Result<String>;
}

/// Renderer that returns the stored value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFieldRenderer;

#[async_trait]
impl FieldRenderer for PlainFieldRenderer {
    async fn render(&self, request: RenderRequest<'_>) -> Result<String> {
        Ok(request.value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_renderer_passes_value_through() {
        let settings = HashMap::new();
        let request = RenderRequest {
            form_id: FormId::new(1).expect("valid form id"),
            submission_id: SubmissionId::new(2).expect("valid submission id"),
            value: "<b>as stored</b>",
            field: None,
            field_types: &[],
            settings: &settings,
            context: EMAIL_TEMPLATE_CONTEXT,
        };

        let out = PlainFieldRenderer
            .render(request)
            .await
            .expect("render value");
        assert_eq!(out, "<b>as stored</b>");
    }
}
