//! Shared identifier types.
//!
//! Every record in Form Tools is keyed by a positive integer. These newtypes
//! keep a form id from being passed where a submission id is expected.

use crate::error::FormToolsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "`.")]
            ///
            /// # Errors
            /// Returns error if the id is not strictly positive.
            pub fn new(id: i64) -> Result<Self, FormToolsError> {
                if id > 0 {
                    Ok(Self(id))
                } else {
                    Err(FormToolsError::Validation(format!(
                        concat!("invalid ", $label, " id: must be positive, got {}"),
                        id
                    )))
                }
            }

            /// Get the raw integer value.
            #[must_use]
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = FormToolsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s.trim().parse::<i64>().map_err(|e| {
                    FormToolsError::Validation(format!(
                        concat!("invalid ", $label, " id '{}': {}"),
                        s, e
                    ))
                })?;
                Self::new(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of a form.
    FormId,
    "form"
);
record_id!(
    /// Identifier of a submission within a form.
    SubmissionId,
    "submission"
);
record_id!(
    /// Identifier of a form field.
    FieldId,
    "field"
);
record_id!(
    /// Identifier of a field type (textbox, file upload, ...).
    FieldTypeId,
    "field type"
);
record_id!(
    /// Identifier of a user-authored page in the Pages module.
    PageId,
    "page"
);
record_id!(
    /// Identifier of a client account.
    ClientId,
    "client"
);
record_id!(
    /// Identifier of any account (administrator or client).
    AccountId,
    "account"
);
