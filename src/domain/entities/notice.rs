//! Transient user-facing notices (toasts).

use serde::Serialize;

use crate::utils::url_validator::UrlValidationError;

/// Visual treatment of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

impl NoticeVariant {
    /// CSS modifier used by the page templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Default => "notice--default",
            Self::Destructive => "notice--destructive",
        }
    }
}

/// A short title/description pair shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn shortened() -> Self {
        Self {
            title: "URL shortened successfully!",
            description: "Your shortened URL is ready to use.",
            variant: NoticeVariant::Default,
        }
    }

    pub fn copied() -> Self {
        Self {
            title: "Copied to clipboard!",
            description: "The shortened URL has been copied to your clipboard.",
            variant: NoticeVariant::Default,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl From<&UrlValidationError> for Notice {
    fn from(err: &UrlValidationError) -> Self {
        match err {
            UrlValidationError::EmptyInput => Self {
                title: "Please enter a URL",
                description: "You need to provide a URL to shorten.",
                variant: NoticeVariant::Destructive,
            },
            UrlValidationError::InvalidFormat => Self {
                title: "Invalid URL format",
                description: "Please enter a valid URL starting with http:// or https://",
                variant: NoticeVariant::Destructive,
            },
        }
    }
}
