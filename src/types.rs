use serde::{Deserialize, Serialize};

/// A showcased application (portfolio card)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppType {
    pub id: String,
    pub name: String,
    pub image: String,
    pub link: String,
    pub tab: String,
    pub caption: String,
    #[serde(default)]
    pub is_full: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,  // Accent colour for the card
    pub background: String,
}

/// A technology shown in the tools strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,  // Empty means "look it up in the icon table"
    pub link: String,
    pub tab: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Contact form payload. Transport only, no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub details: String,
}
