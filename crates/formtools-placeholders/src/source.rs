//! Records the resolver reads, and the trait that supplies them.

use crate::error::Result;
use async_trait::async_trait;
use formtools_core::{FieldId, FieldTypeId, FormId, SubmissionId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Form metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    /// Form id
    pub form_id: FormId,
    /// Display name
    pub form_name: String,
    /// URL the form is published at
    pub form_url: String,
}

/// One field of a stored submission, as the submission view lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFieldView {
    /// Field id
    pub field_id: FieldId,
    /// Machine name, used in token names
    pub field_name: String,
    /// Label shown to users
    pub field_title: String,
    /// Field type
    pub field_type_id: FieldTypeId,
    /// Whether Form Tools itself maintains the field (`core__*` columns)
    pub is_system_field: bool,
    /// Raw stored value
    pub content: String,
}

/// Contact details of an administrator or client account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Email address
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Company name
    pub company_name: String,
}

/// A form field definition with its settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field id
    pub field_id: FieldId,
    /// Machine name
    pub field_name: String,
    /// Label
    pub field_title: String,
    /// Field type
    pub field_type_id: FieldTypeId,
    /// Identifier of the field type (`textbox`, `date`, ...), when type info was requested
    pub field_type_identifier: Option<String>,
    /// Field settings by name, when settings were requested
    pub settings: HashMap<String, String>,
}

/// A field type from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    /// Field type id
    pub field_type_id: FieldTypeId,
    /// Stable identifier (`textbox`, `file`, ...)
    pub identifier: String,
    /// Display name
    pub name: String,
}

/// What to include when fetching form field definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormFieldOptions {
    /// Fill in [`FieldDefinition::field_type_identifier`]
    pub include_field_type_info: bool,
    /// Fill in [`FieldDefinition::settings`]
    pub include_field_settings: bool,
    /// Resolve settings whose values are computed at runtime
    pub evaluate_dynamic_settings: bool,
}

impl FormFieldOptions {
    /// Everything enabled; what placeholder resolution asks for.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            include_field_type_info: true,
            include_field_settings: true,
            evaluate_dynamic_settings: true,
        }
    }
}

/// Read access to the stored records placeholder resolution needs.
///
/// Implementations are typically backed by the application database and
/// must be thread-safe (Send + Sync) for use in async contexts.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Global settings by name.
    async fn settings(&self) -> Result<HashMap<String, String>>;

    /// Form metadata.
    ///
    /// # Errors
    /// Returns `MissingRecord` if the form doesn't exist.
    async fn form(&self, form_id: FormId) -> Result<FormInfo>;

    /// The fields of one submission, in display order.
    ///
    /// # Errors
    /// Returns `MissingRecord` if the submission doesn't exist.
    async fn submission_fields(
        &self,
        form_id: FormId,
        submission_id: SubmissionId,
    ) -> Result<Vec<SubmissionFieldView>>;

    /// The administrator account.
    async fn admin_profile(&self) -> Result<AccountProfile>;

    /// Ids of every field type that stores uploaded files.
    async fn file_field_type_ids(&self) -> Result<HashSet<FieldTypeId>>;

    /// The field type catalogue.
    async fn field_types(&self) -> Result<Vec<FieldType>>;

    /// Field definitions of a form.
    async fn form_fields(
        &self,
        form_id: FormId,
        options: FormFieldOptions,
    ) -> Result<Vec<FieldDefinition>>;

    /// Settings of a single field by name (`folder_url` for file fields).
    async fn field_settings(&self, field_id: FieldId) -> Result<HashMap<String, String>>;
}
