//! Outfit response records decoded from the recommendation API's JSON

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title shown for a product listing that has none
pub const DEFAULT_TITLE: &str = "제목 없음";

/// Link placeholder; a product carrying it gets no "view product" anchor
pub const PLACEHOLDER_LINK: &str = "#";

/// A generated outfit plus the shopping results found for it.
///
/// Every field is optional on the wire. Missing keys and explicit `null`
/// both decode to `None`, and the accessors supply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    #[serde(default)]
    pub outfit_image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Prompt used for image generation (never rendered)
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// One recommended product listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Query the product was found with
    #[serde(default)]
    pub search_query: Option<String>,
}

impl OutfitResponse {
    /// Parse an outfit response from JSON text.
    ///
    /// The document and each product must be JSON objects; serde would
    /// otherwise accept arrays as positional structs.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).context("Failed to parse outfit response JSON")?;

        let Some(obj) = value.as_object() else {
            bail!("Outfit response must be a JSON object");
        };
        if let Some(Value::Array(products)) = obj.get("products") {
            for (i, product) in products.iter().enumerate() {
                if !product.is_object() {
                    bail!("Product #{} is not a JSON object: {}", i, product);
                }
            }
        }

        serde_json::from_value(value).context("Failed to decode outfit response")
    }

    pub fn outfit_image_url(&self) -> &str {
        self.outfit_image_url.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn search_query(&self) -> &str {
        self.search_query.as_deref().unwrap_or("")
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or(&[])
    }
}

impl Product {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or("")
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or(PLACEHOLDER_LINK)
    }

    pub fn snippet(&self) -> &str {
        self.snippet.as_deref().unwrap_or("")
    }

    pub fn search_query(&self) -> &str {
        self.search_query.as_deref().unwrap_or("")
    }
}
