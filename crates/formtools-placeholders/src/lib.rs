//! Form Tools Placeholders - email template values for a submission.
//!
//! Email templates refer to submission data through placeholder tokens such
//! as `{$ANSWER_email}` or `{$FORMNAME}`. This crate builds the token-to-value
//! mapping for one submission by pulling records from a [`RecordSource`] and
//! rendering answers through a [`FieldRenderer`].
//!
//! # Architecture
//!
//! - **Record source** ([`source`]): async access to forms, submissions, fields and settings
//! - **Field rendering** ([`render`]): turns a raw stored value into display text
//! - **Resolver** ([`resolver`]): assembles the placeholder mapping
//! - **Mapping** ([`placeholders`]): the result, with `{$TOKEN}` template substitution
//!
//! Nothing here writes; the resolver holds no state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod placeholders;
pub mod render;
pub mod resolver;
pub mod source;

pub use error::{PlaceholderError, Result};
pub use placeholders::Placeholders;
pub use render::{FieldRenderer, PlainFieldRenderer, RenderRequest, EMAIL_TEMPLATE_CONTEXT};
pub use resolver::PlaceholderResolver;
pub use source::{
    AccountProfile, FieldDefinition, FieldType, FormFieldOptions, FormInfo, RecordSource,
    SubmissionFieldView,
};
