//! Transport-agnostic payloads of the boundary events the navigation core
//! consumes. Hosts typically bridge these over DOM `CustomEvent`s; the core
//! only cares about the shapes.

use serde::{Deserialize, Serialize};

use crate::config::Label;

/// Payload of a badge update. The value is stored under the id when
/// present, otherwise under the url.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBadgeValueDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub value: Label,
}

impl SetBadgeValueDetail {
    /// The key the badge value is stored under: the id when present, the
    /// url otherwise.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.url.as_deref())
    }
}

/// Payload of an active-url change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveUrlDetail {
    pub url: String,
}
