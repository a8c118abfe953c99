//! Endpoint resolution for the contact relay.

use contracts::site::SiteConfig;

use crate::shared::dom::meta_content;

/// Name of the `<meta>` tag that overrides the configured contact endpoint.
pub const CONTACT_ENDPOINT_META: &str = "contact-endpoint";

/// URL the contact form posts to
///
/// A `<meta name="contact-endpoint" content="...">` tag in `index.html` wins,
/// so one build can be deployed against different relays.
pub fn contact_endpoint(site: &SiteConfig) -> String {
    meta_content(CONTACT_ENDPOINT_META).unwrap_or_else(|| site.contact.endpoint.clone())
}
