//! Placeholder resolution for one submission.

use crate::error::Result;
use crate::placeholders::Placeholders;
use crate::render::{FieldRenderer, RenderRequest, EMAIL_TEMPLATE_CONTEXT};
use crate::source::{AccountProfile, FormFieldOptions, RecordSource};
use formtools_core::{FormId, GeneralConfig, SubmissionId};
use std::sync::Arc;
use tracing::debug;

/// System fields that also answer to a legacy short token.
const LEGACY_ALIASES: [(&str, &str); 3] = [
    ("core__submission_date", "SUBMISSIONDATE"),
    ("core__last_modified", "LASTMODIFIEDDATE"),
    ("core__ip_address", "IPADDRESS"),
];

/// Builds the placeholder mapping for email templates.
#[derive(Clone)]
pub struct PlaceholderResolver {
    records: Arc<dyn RecordSource>,
    renderer: Arc<dyn FieldRenderer>,
    root_url: String,
}

impl PlaceholderResolver {
    /// Create a resolver.
    ///
    /// `root_url` is the installation's base URL, without a trailing slash.
    pub fn new(
        records: Arc<dyn RecordSource>,
        renderer: Arc<dyn FieldRenderer>,
        root_url: impl Into<String>,
    ) -> Self {
        Self {
            records,
            renderer,
            root_url: root_url.into(),
        }
    }

    /// Create a resolver for the installation described by the `[general]`
    /// config section.
    pub fn from_config(
        records: Arc<dyn RecordSource>,
        renderer: Arc<dyn FieldRenderer>,
        config: &GeneralConfig,
    ) -> Self {
        Self::new(records, renderer, config.root_url.trim_end_matches('/'))
    }

    /// Resolve every placeholder for a submission.
    ///
    /// Per submission field:
    /// - `QUESTION_<name>` holds the field title, for non-system fields
    /// - file fields get `FILENAME_<name>` and `FILEURL_<name>`
    /// - every other field gets `ANSWER_<name>`, rendered for email templates
    ///
    /// followed by `ADMINEMAIL`, `FORMNAME`, `FORMURL`, `SUBMISSIONID` and
    /// `LOGINURL`, and the account's `EMAIL`, `FIRSTNAME`, `LASTNAME` and
    /// `COMPANYNAME` when one is given.
    ///
    /// # Errors
    /// Returns whatever the record source or renderer returns, unchanged.
    pub async fn resolve(
        &self,
        form_id: FormId,
        submission_id: SubmissionId,
        account: Option<&AccountProfile>,
    ) -> Result<Placeholders> {
        let settings = self.records.settings().await?;
        let form = self.records.form(form_id).await?;
        let fields = self
            .records
            .submission_fields(form_id, submission_id)
            .await?;
        let admin = self.records.admin_profile().await?;
        let file_type_ids = self.records.file_field_type_ids().await?;
        let field_types = self.records.field_types().await?;
        let definitions = self
            .records
            .form_fields(form_id, FormFieldOptions::full())
            .await?;

        let mut placeholders = Placeholders::new();

        for field in &fields {
            let name = &field.field_name;

            if !field.is_system_field {
                placeholders.insert(format!("QUESTION_{name}"), field.field_title.clone());
            }

            if file_type_ids.contains(&field.field_type_id) {
                let field_settings = self.records.field_settings(field.field_id).await?;
                let folder_url = field_settings
                    .get("folder_url")
                    .map_or("", String::as_str);

                placeholders.insert(format!("FILENAME_{name}"), field.content.clone());
                placeholders.insert(
                    format!("FILEURL_{name}"),
                    format!("{folder_url}/{}", field.content),
                );
                continue;
            }

            let request = RenderRequest {
                form_id,
                submission_id,
                value: &field.content,
                field: definitions.iter().find(|d| d.field_id == field.field_id),
                field_types: &field_types,
                settings: &settings,
                context: EMAIL_TEMPLATE_CONTEXT,
            };
            let value = self.renderer.render(request).await?;

            let alias = LEGACY_ALIASES
                .iter()
                .find(|(system, _)| *system == name.as_str());
            if let Some((_, alias)) = alias {
                placeholders.insert(*alias, value.clone());
            }
            placeholders.insert(format!("ANSWER_{name}"), value);
        }

        placeholders.insert("ADMINEMAIL", admin.email);
        placeholders.insert("FORMNAME", form.form_name);
        placeholders.insert("FORMURL", form.form_url);
        placeholders.insert("SUBMISSIONID", submission_id.to_string());
        placeholders.insert("LOGINURL", format!("{}/index.php", self.root_url));

        if let Some(account) = account {
            placeholders.insert("EMAIL", account.email.clone());
            placeholders.insert("FIRSTNAME", account.first_name.clone());
            placeholders.insert("LASTNAME", account.last_name.clone());
            placeholders.insert("COMPANYNAME", account.company_name.clone());
        }

        debug!(
            form_id = %form_id,
            submission_id = %submission_id,
            fields = fields.len(),
            tokens = placeholders.len(),
            "resolved placeholders"
        );

        Ok(placeholders)
    }
}
