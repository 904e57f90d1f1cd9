// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoded CMS payload.
//!
//! The delivery API returns loosely-typed page-builder entries. Everything
//! is validated here, once, at the fetch boundary: missing leaf fields turn
//! into documented defaults, and each page block is decoded independently so
//! one malformed block never hides its siblings.

use serde::Deserialize;
use serde_json::Value;

pub const PLACEHOLDER_BANNER_IMAGE: &str =
    "https://via.placeholder.com/1200x500.png?text=No+Image";
pub const PLACEHOLDER_SERVICE_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub entries: Vec<ContentEntry>,
}

/// One CMS entry. Entries without a `portfolio_page` sequence contribute
/// nothing to any section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub portfolio_page: Vec<Value>,
}

fn default_hero_text() -> String {
    "Default hero text".to_string()
}

fn default_mission() -> String {
    "Default mission text".to_string()
}

fn default_story() -> String {
    "Default story text".to_string()
}

fn default_service_title() -> String {
    "Service Title".to_string()
}

fn default_service_description() -> String {
    "No description available".to_string()
}

fn default_checked() -> bool {
    true
}

/// A CMS-managed file reference; only the URL matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub url: Option<String>,
}

impl Asset {
    pub fn url_or(&self, fallback: &str) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroSection {
    #[serde(default = "default_hero_text")]
    pub hero_text: String,
    #[serde(default)]
    pub banner_image: Asset,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutSection {
    #[serde(default = "default_mission")]
    pub mission: String,
    #[serde(default = "default_story")]
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessStep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_service_title")]
    pub title: String,
    #[serde(default = "default_service_description")]
    pub description: String,
    #[serde(default)]
    pub image: Asset,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default = "default_checked")]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientRecord {
    #[serde(default)]
    pub image: Asset,
    // Older entries carried the logo under `client` instead of `image`.
    #[serde(default)]
    pub client: Asset,
}

impl ClientRecord {
    pub fn image_url(&self) -> Option<String> {
        self.image
            .url
            .clone()
            .or_else(|| self.client.url.clone())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_checked")]
    pub checked: bool,
}

/// The `clients` field may hold a single record or an array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// A page-builder block, tagged by which section key it carries.
#[derive(Debug, Clone)]
pub enum Block {
    Hero(HeroSection),
    About(AboutSection),
    Services(ServiceSection),
    Clients(Vec<ClientRecord>),
    Contact(ContactSection),
}

#[derive(Debug, Default, Deserialize)]
struct RawBlock {
    #[serde(default)]
    hero_section: Option<HeroSection>,
    #[serde(default)]
    about_us: Option<AboutSection>,
    #[serde(default)]
    services: Option<ServiceSection>,
    #[serde(default)]
    clients: Option<OneOrMany<ClientRecord>>,
    #[serde(default)]
    contact: Option<ContactSection>,
}

/// Decode a raw page block. Returns `None` both for blocks carrying no known
/// section key and for blocks whose shape does not decode; the latter is
/// logged and skipped so the rest of the page still renders.
pub fn decode_block(raw: &Value) -> Option<Block> {
    let block: RawBlock = match serde_json::from_value(raw.clone()) {
        Ok(block) => block,
        Err(error) => {
            log::warn!("skipping malformed page block: {error}");
            return None;
        }
    };
    if let Some(hero) = block.hero_section {
        Some(Block::Hero(hero))
    } else if let Some(about) = block.about_us {
        Some(Block::About(about))
    } else if let Some(services) = block.services {
        Some(Block::Services(services))
    } else if let Some(clients) = block.clients {
        Some(Block::Clients(clients.into_vec()))
    } else {
        block.contact.map(Block::Contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_without_known_key_is_skipped() {
        assert!(decode_block(&json!({ "unrelated": { "x": 1 } })).is_none());
        assert!(decode_block(&json!({})).is_none());
    }

    #[test]
    fn malformed_block_is_absorbed() {
        // `mission` should be a string; the whole block is dropped.
        let raw = json!({ "about_us": { "mission": 42 } });
        assert!(decode_block(&raw).is_none());
    }

    #[test]
    fn hero_defaults_fill_missing_leaves() {
        let block = decode_block(&json!({ "hero_section": {} })).unwrap();
        match block {
            Block::Hero(hero) => {
                assert_eq!(hero.hero_text, "Default hero text");
                assert_eq!(hero.banner_image.url_or(PLACEHOLDER_BANNER_IMAGE), PLACEHOLDER_BANNER_IMAGE);
            }
            other => panic!("expected hero block, got {other:?}"),
        }
    }

    #[test]
    fn single_client_object_becomes_one_element_vec() {
        let single = decode_block(&json!({
            "clients": { "image": { "url": "https://cdn.example/logo.png" } }
        }))
        .unwrap();
        let many = decode_block(&json!({
            "clients": [{ "image": { "url": "https://cdn.example/logo.png" } }]
        }))
        .unwrap();
        let (Block::Clients(single), Block::Clients(many)) = (single, many) else {
            panic!("expected clients blocks");
        };
        assert_eq!(single.len(), 1);
        assert_eq!(
            single[0].image_url(),
            many[0].image_url(),
        );
    }

    #[test]
    fn client_url_falls_back_to_legacy_field() {
        let record: ClientRecord =
            serde_json::from_value(json!({ "client": { "url": "https://cdn.example/old.png" } }))
                .unwrap();
        assert_eq!(record.image_url().as_deref(), Some("https://cdn.example/old.png"));

        let empty: ClientRecord = serde_json::from_value(json!({ "image": { "url": "" } })).unwrap();
        assert_eq!(empty.image_url(), None);
    }

    #[test]
    fn checked_defaults_to_true() {
        let Block::Services(service) = decode_block(&json!({ "services": {} })).unwrap() else {
            panic!("expected services block");
        };
        assert!(service.checked);
        assert_eq!(service.title, "Service Title");
        assert_eq!(service.description, "No description available");

        let Block::Contact(contact) = decode_block(&json!({ "contact": {} })).unwrap() else {
            panic!("expected contact block");
        };
        assert!(contact.checked);
    }

    #[test]
    fn response_without_entries_decodes_empty() {
        let response: EntriesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.entries.is_empty());

        let entry: ContentEntry = serde_json::from_value(json!({ "title": "no page" })).unwrap();
        assert!(entry.portfolio_page.is_empty());
    }
}
