//! Page records and the inputs that create them.

use formtools_core::{ClientId, GeneralConfig, PageId, PageNav};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who may view a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Administrator only
    #[default]
    Admin,
    /// Anyone, without logging in
    Public,
    /// The administrator and the selected clients
    Private,
}

impl AccessType {
    /// The stored value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// How a page's content is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Static HTML
    #[default]
    Html,
    /// PHP source
    Php,
    /// Smarty template
    Smarty,
}

impl ContentType {
    /// The stored value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Php => "php",
            Self::Smarty => "smarty",
        }
    }
}

macro_rules! stored_enum {
    ($name:ident, $label:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == Self::$variant.as_str() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!(concat!("invalid ", $label, " '{}'"), s))
            }
        }
    };
}

stored_enum!(AccessType, "access type", [Admin, Public, Private]);
stored_enum!(ContentType, "content type", [Html, Php, Smarty]);

/// A stored page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page id
    pub page_id: PageId,
    /// Internal name, shown in the page list
    pub page_name: String,
    /// Who may view it
    pub access_type: AccessType,
    /// How `content` is interpreted
    pub content_type: ContentType,
    /// Whether the page is edited with the WYSIWYG editor
    pub use_wysiwyg: bool,
    /// Title shown above the content
    pub heading: Option<String>,
    /// Page body
    pub content: Option<String>,
}

impl Page {
    /// The identifier menu items use to link here.
    #[must_use]
    pub fn page_identifier(&self) -> String {
        page_identifier(self.page_id)
    }
}

/// Menu `page_identifier` of a page.
#[must_use]
pub fn page_identifier(page_id: PageId) -> String {
    format!("page_{page_id}")
}

/// A page together with the clients allowed to view it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetails {
    /// The page
    pub page: Page,
    /// Clients with access; only meaningful for [`AccessType::Private`]
    pub client_ids: Vec<ClientId>,
}

/// The submitted add/edit page form.
///
/// Both editors' contents are submitted; [`PageInput::content`] picks the
/// one that is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInput {
    /// Internal name
    pub page_name: String,
    /// Who may view the page
    pub access_type: AccessType,
    /// How the content is interpreted
    pub content_type: ContentType,
    /// Whether the WYSIWYG editor was active
    pub use_wysiwyg: bool,
    /// Title
    pub heading: Option<String>,
    /// Content from the WYSIWYG editor
    pub wysiwyg_content: String,
    /// Content from the code editor
    pub codemirror_content: String,
    /// Clients to grant access, for private pages
    pub selected_client_ids: Vec<ClientId>,
}

impl PageInput {
    /// The content to store.
    #[must_use]
    pub fn content(&self) -> &str {
        if self.content_type == ContentType::Html && self.use_wysiwyg {
            &self.wysiwyg_content
        } else {
            &self.codemirror_content
        }
    }

    /// Clients to store; empty unless the page is private.
    #[must_use]
    pub fn client_ids(&self) -> &[ClientId] {
        if self.access_type == AccessType::Private {
            &self.selected_client_ids
        } else {
            &[]
        }
    }
}

/// How many pages `get_pages` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// Every page
    All,
    /// At most this many, starting at the requested page
    PerPage(u32),
}

/// One page of the page list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageList {
    /// The pages, ordered by heading
    pub results: Vec<Page>,
    /// Total number of pages stored
    pub num_results: u64,
}

impl PageList {
    /// Navigation for this list when it was fetched as page `page_num` of
    /// `per_page` pages, with the window size from `[general]`.
    #[must_use]
    pub fn page_nav(&self, per_page: u32, page_num: u64, config: &GeneralConfig) -> PageNav {
        PageNav::with_config(self.num_results, u64::from(per_page), page_num, config)
    }
}
