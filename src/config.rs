// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site configuration baked in at compile time.
//!
//! All values come from the build environment; restart the build if you
//! change one of them.

use once_cell::sync::Lazy;

pub const DEFAULT_CLIENTS_PAGE_THRESHOLD: usize = 10;

#[derive(Debug)]
pub struct SiteConfig {
    /// Base URL of the CMS delivery API.
    pub cdn_base_url: &'static str,
    pub api_key: &'static str,
    pub delivery_token: &'static str,
    pub environment: &'static str,
    /// The dedicated clients page only renders when the normalized client
    /// count exceeds this; at or below it the route bounces back home.
    pub clients_page_threshold: usize,
    pub email_endpoint: &'static str,
    pub email_service_id: &'static str,
    pub email_public_key: &'static str,
    /// Template used to notify the site owner of a submission.
    pub owner_template_id: &'static str,
    /// Template used to confirm receipt to the submitter.
    pub confirmation_template_id: &'static str,
    pub owner_email: &'static str,
}

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| SiteConfig {
    cdn_base_url: option_env!("CONTENTSTACK_CDN_BASE_URL").unwrap_or("https://cdn.contentstack.io"),
    api_key: option_env!("CONTENTSTACK_API_KEY").unwrap_or(""),
    delivery_token: option_env!("CONTENTSTACK_DELIVERY_TOKEN").unwrap_or(""),
    environment: option_env!("CONTENTSTACK_ENVIRONMENT").unwrap_or("production"),
    clients_page_threshold: parse_threshold(option_env!("CLIENTS_PAGE_THRESHOLD")),
    email_endpoint: option_env!("EMAIL_ENDPOINT")
        .unwrap_or("https://api.emailjs.com/api/v1.0/email/send"),
    email_service_id: option_env!("EMAIL_SERVICE_ID").unwrap_or(""),
    email_public_key: option_env!("EMAIL_PUBLIC_KEY").unwrap_or(""),
    owner_template_id: option_env!("EMAIL_OWNER_TEMPLATE_ID").unwrap_or(""),
    confirmation_template_id: option_env!("EMAIL_CONFIRMATION_TEMPLATE_ID").unwrap_or(""),
    owner_email: option_env!("OWNER_EMAIL").unwrap_or(""),
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

fn parse_threshold(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_CLIENTS_PAGE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_when_unset() {
        assert_eq!(parse_threshold(None), DEFAULT_CLIENTS_PAGE_THRESHOLD);
    }

    #[test]
    fn threshold_parses_override() {
        assert_eq!(parse_threshold(Some("25")), 25);
        assert_eq!(parse_threshold(Some(" 3 ")), 3);
    }

    #[test]
    fn threshold_ignores_garbage() {
        assert_eq!(parse_threshold(Some("lots")), DEFAULT_CLIENTS_PAGE_THRESHOLD);
        assert_eq!(parse_threshold(Some("")), DEFAULT_CLIENTS_PAGE_THRESHOLD);
    }
}
