//! DTOs for link endpoints.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::CreatedLink;
use crate::domain::entities::{Link, LinkPage};

/// Compiled regex for custom slug validation.
static CUSTOM_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("custom slug regex is valid"));

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The redirect target (absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Optional caller-chosen slug; an empty string means "generate one".
    #[validate(length(min = 1, max = 64, message = "Custom slug must be 1-64 characters"))]
    #[validate(regex(path = *CUSTOM_SLUG_REGEX, message = "Custom slug can only contain letters and digits"))]
    pub custom_slug: Option<String>,
}

impl CreateLinkRequest {
    /// Treats a blank `customSlug` as absent.
    pub fn normalized(mut self) -> Self {
        self.custom_slug = self.custom_slug.filter(|s| !s.trim().is_empty());
        self
    }
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Response for `POST /api/links`.
///
/// `qr_image` is a `data:image/png;base64,...` URL encoding `/r/{slug}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub qr_image: String,
}

impl From<CreatedLink> for CreateLinkResponse {
    fn from(created: CreatedLink) -> Self {
        Self {
            link: created.link.into(),
            qr_image: png_data_url(&created.qr_png),
        }
    }
}

/// Response for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub items: Vec<LinkResponse>,
    pub total: i64,
}

impl From<LinkPage> for LinkListResponse {
    fn from(page: LinkPage) -> Self {
        Self {
            items: page.items.into_iter().map(LinkResponse::from).collect(),
            total: page.total,
        }
    }
}

/// Encodes PNG bytes as a data URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "customSlug": "abc"}"#)
                .unwrap();

        assert_eq!(req.custom_slug.as_deref(), Some("abc"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_symbol_slug() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "customSlug": "a-b"}"#)
                .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_rejects_empty_url() {
        let req: CreateLinkRequest = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_custom_slug_is_absent() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "customSlug": ""}"#).unwrap();

        let req = req.normalized();
        assert!(req.custom_slug.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_png_data_url_prefix() {
        let url = png_data_url(&[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_create_response_is_flat() {
        let created = CreatedLink {
            link: Link::new(
                1,
                "abc".to_string(),
                "https://example.com".to_string(),
                0,
                Utc::now(),
            ),
            qr_png: vec![1, 2, 3],
        };

        let value = serde_json::to_value(CreateLinkResponse::from(created)).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["slug"], "abc");
        assert_eq!(value["clicks"], 0);
        assert!(value["qrImage"].as_str().unwrap().starts_with("data:image/png;base64,"));
    }
}
