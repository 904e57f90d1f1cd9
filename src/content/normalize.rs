// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-section normalizers.
//!
//! Pure functions from decoded entries to the records each section renders.
//! All of them share the same shape: flatten entries to blocks, keep the
//! blocks carrying the relevant tag, map to the target record.

use crate::content::model::{
    Block, ContentEntry, Faq, Feature, ProcessStep, decode_block, PLACEHOLDER_BANNER_IMAGE,
    PLACEHOLDER_SERVICE_IMAGE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBanner {
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub mission: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech_stack: Vec<String>,
    pub use_cases: Vec<String>,
    pub features: Vec<Feature>,
    pub benefits: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub faqs: Vec<Faq>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientImage {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub checked: bool,
}

/// Shown when no contact block is checked for display.
pub fn fallback_contact() -> ContactInfo {
    ContactInfo {
        email: "contact@example.com".to_string(),
        phone: "+1 234 567 890".to_string(),
        address: "123 Business Street, City, Country".to_string(),
        checked: true,
    }
}

/// Flatten entries into decoded blocks, in entry order then block order.
fn blocks(entries: &[ContentEntry]) -> impl Iterator<Item = Block> + '_ {
    entries
        .iter()
        .flat_map(|entry| entry.portfolio_page.iter())
        .filter_map(decode_block)
}

pub fn hero_banners(entries: &[ContentEntry]) -> Vec<HeroBanner> {
    blocks(entries)
        .filter_map(|block| match block {
            Block::Hero(hero) => Some(HeroBanner {
                text: hero.hero_text,
                image: hero.banner_image.url_or(PLACEHOLDER_BANNER_IMAGE),
            }),
            _ => None,
        })
        .collect()
}

/// Only the first extracted record is ever displayed, even when several
/// qualify.
pub fn about_content(entries: &[ContentEntry]) -> Option<AboutContent> {
    blocks(entries).find_map(|block| match block {
        Block::About(about) => Some(AboutContent {
            mission: about.mission,
            story: about.story,
        }),
        _ => None,
    })
}

pub fn service_cards(entries: &[ContentEntry]) -> Vec<ServiceCard> {
    blocks(entries)
        .filter_map(|block| match block {
            Block::Services(service) if service.checked => Some(ServiceCard {
                id: service
                    .id
                    .clone()
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| slugify(&service.title)),
                title: service.title,
                description: service.description,
                image: service.image.url_or(PLACEHOLDER_SERVICE_IMAGE),
                tech_stack: service.tech_stack,
                use_cases: service.use_cases,
                features: service.features,
                benefits: service.benefits,
                process: service.process,
                faqs: service.faqs,
                checked: true,
            }),
            _ => None,
        })
        .collect()
}

pub fn client_images(entries: &[ContentEntry]) -> Vec<ClientImage> {
    blocks(entries)
        .filter_map(|block| match block {
            Block::Clients(records) => Some(records),
            _ => None,
        })
        .flatten()
        .filter_map(|record| record.image_url().map(|image| ClientImage { image }))
        .collect()
}

/// First checked contact record wins; no match falls back to the fixed
/// record.
pub fn contact_info(entries: &[ContentEntry]) -> ContactInfo {
    blocks(entries)
        .find_map(|block| match block {
            Block::Contact(contact) if contact.checked => Some(ContactInfo {
                email: contact.email,
                phone: contact.phone,
                address: contact.address,
                checked: true,
            }),
            _ => None,
        })
        .unwrap_or_else(fallback_contact)
}

/// URL-safe id derived from a title: lowercased alphanumeric runs joined by
/// hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(page: serde_json::Value) -> ContentEntry {
        serde_json::from_value(json!({ "portfolio_page": page })).unwrap()
    }

    #[test]
    fn entries_without_page_sequence_yield_nothing() {
        let entries = vec![
            serde_json::from_value::<ContentEntry>(json!({ "title": "bare" })).unwrap(),
        ];
        assert!(hero_banners(&entries).is_empty());
        assert!(about_content(&entries).is_none());
        assert!(service_cards(&entries).is_empty());
        assert!(client_images(&entries).is_empty());
        assert_eq!(contact_info(&entries), fallback_contact());
    }

    #[test]
    fn zero_entries_is_empty_success() {
        let entries: Vec<ContentEntry> = Vec::new();
        assert!(hero_banners(&entries).is_empty());
        assert!(service_cards(&entries).is_empty());
        assert!(client_images(&entries).is_empty());
    }

    #[test]
    fn hero_banner_defaults() {
        let entries = vec![entry(json!([{ "hero_section": {} }]))];
        let banners = hero_banners(&entries);
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].text, "Default hero text");
        assert_eq!(banners[0].image, PLACEHOLDER_BANNER_IMAGE);
    }

    #[test]
    fn about_first_record_wins() {
        let entries = vec![
            entry(json!([
                { "about_us": { "mission": "first mission", "story": "first story" } },
                { "about_us": { "mission": "second mission", "story": "second story" } },
            ])),
            entry(json!([{ "about_us": { "mission": "third mission" } }])),
        ];
        let about = about_content(&entries).unwrap();
        assert_eq!(about.mission, "first mission");
        assert_eq!(about.story, "first story");
    }

    #[test]
    fn unchecked_services_are_excluded_absent_checked_included() {
        let entries = vec![entry(json!([
            { "services": { "title": "Visible" } },
            { "services": { "title": "Hidden", "checked": false } },
            { "services": { "title": "Also Visible", "checked": true } },
        ]))];
        let cards = service_cards(&entries);
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Visible", "Also Visible"]);
    }

    #[test]
    fn service_id_prefers_explicit_over_slug() {
        let entries = vec![entry(json!([
            { "services": { "id": "custom-id", "title": "Web Development" } },
            { "services": { "title": "Cloud & DevOps Consulting" } },
        ]))];
        let cards = service_cards(&entries);
        assert_eq!(cards[0].id, "custom-id");
        assert_eq!(cards[1].id, "cloud-devops-consulting");
    }

    #[test]
    fn slugify_squeezes_separators() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("  AI / ML  Services  "), "ai-ml-services");
        assert_eq!(slugify("UX"), "ux");
    }

    #[test]
    fn single_clients_object_equals_one_element_array() {
        let single = vec![entry(json!([
            { "clients": { "image": { "url": "https://cdn.example/a.png" } } }
        ]))];
        let array = vec![entry(json!([
            { "clients": [{ "image": { "url": "https://cdn.example/a.png" } }] }
        ]))];
        assert_eq!(client_images(&single), client_images(&array));
    }

    #[test]
    fn clients_without_any_image_url_are_dropped() {
        let entries = vec![entry(json!([
            { "clients": [
                { "image": { "url": "https://cdn.example/a.png" } },
                { "note": "no image here" },
                { "client": { "url": "https://cdn.example/b.png" } },
            ] }
        ]))];
        let images = client_images(&entries);
        assert_eq!(
            images,
            vec![
                ClientImage { image: "https://cdn.example/a.png".into() },
                ClientImage { image: "https://cdn.example/b.png".into() },
            ]
        );
    }

    #[test]
    fn contact_selection_is_first_checked_in_order() {
        let entries = vec![
            entry(json!([
                { "contact": { "email": "skip@example.com", "checked": false } },
                { "contact": { "email": "first@example.com", "phone": "1" } },
            ])),
            entry(json!([{ "contact": { "email": "later@example.com" } }])),
        ];
        assert_eq!(contact_info(&entries).email, "first@example.com");
    }

    #[test]
    fn contact_falls_back_to_fixed_record() {
        let entries = vec![entry(json!([
            { "contact": { "email": "off@example.com", "checked": false } }
        ]))];
        let info = contact_info(&entries);
        assert_eq!(info.email, "contact@example.com");
        assert_eq!(info.phone, "+1 234 567 890");
        assert_eq!(info.address, "123 Business Street, City, Country");
    }

    #[test]
    fn bad_block_does_not_hide_good_ones() {
        let entries = vec![entry(json!([
            { "services": { "title": 17 } },
            { "services": { "title": "Still Here" } },
        ]))];
        let cards = service_cards(&entries);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Still Here");
    }
}
