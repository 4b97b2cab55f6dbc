//! Site copy and records, loaded once from the embedded JSON document.

use serde::Deserialize;
use thiserror::Error;

use crate::interaction::layout::SectionId;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content has no {0}")]
    Empty(&'static str),
    #[error("testimonial by {name} has rating {rating}, expected 1-5")]
    Rating { name: String, rating: u8 },
    #[error("phone number {0:?} must be in national format with a leading 0")]
    PhoneNumber(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub section: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitIcon {
    Droplet,
    Shield,
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub size: String,
    pub price: String,
    pub image_url: String,
    pub key_benefits: Vec<String>,
    pub how_to_use: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    pub image_url: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub owner: String,
    /// National format, e.g. `03057427271`.
    pub phone_number: String,
    pub country_code: String,
}

impl Contact {
    // Validated to start with the trunk prefix in `SiteContent::validate`.
    fn subscriber_digits(&self) -> &str {
        self.phone_number.strip_prefix('0').unwrap_or(&self.phone_number)
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}{}", self.country_code, self.subscriber_digits())
    }

    pub fn tel_link(&self) -> String {
        format!("tel:+{}{}", self.country_code, self.subscriber_digits())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credit {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub slides: Vec<Slide>,
    pub benefits: Vec<Benefit>,
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
    pub credit: Credit,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.nav.is_empty() {
            return Err(ContentError::Empty("navigation links"));
        }
        if self.slides.is_empty() {
            return Err(ContentError::Empty("hero slides"));
        }
        if self.products.is_empty() {
            return Err(ContentError::Empty("products"));
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::Empty("testimonials"));
        }
        if let Some(t) = self.testimonials.iter().find(|t| !(1..=5).contains(&t.rating)) {
            return Err(ContentError::Rating {
                name: t.name.clone(),
                rating: t.rating,
            });
        }
        let phone = &self.contact.phone_number;
        if !phone.starts_with('0') || phone.len() < 2 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContentError::PhoneNumber(phone.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_edit(edit: impl FnOnce(&mut serde_json::Value)) -> Result<SiteContent, ContentError> {
        let mut doc: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        edit(&mut doc);
        SiteContent::from_json(&doc.to_string())
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.slides.len(), 3);
        assert_eq!(content.products.len(), 2);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(
            content.nav.iter().map(|link| link.section).collect::<Vec<_>>(),
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Products,
                SectionId::Testimonials,
                SectionId::Order,
            ]
        );
        assert_eq!(content.products[0].key_benefits.len(), 4);
    }

    #[test]
    fn contact_links_drop_trunk_prefix() {
        let contact = SiteContent::load().unwrap().contact;
        assert_eq!(contact.whatsapp_link(), "https://wa.me/923057427271");
        assert_eq!(contact.tel_link(), "tel:+923057427271");
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let err = with_edit(|doc| doc["testimonials"][1]["rating"] = 6.into()).unwrap_err();
        assert!(matches!(err, ContentError::Rating { rating: 6, .. }), "{err}");

        let err = with_edit(|doc| doc["testimonials"][0]["rating"] = 0.into()).unwrap_err();
        assert!(matches!(err, ContentError::Rating { rating: 0, .. }), "{err}");
    }

    #[test]
    fn rejects_empty_lists() {
        let err = with_edit(|doc| doc["slides"] = serde_json::json!([])).unwrap_err();
        assert_eq!(err.to_string(), "site content has no hero slides");

        let err = with_edit(|doc| doc["products"] = serde_json::json!([])).unwrap_err();
        assert!(matches!(err, ContentError::Empty("products")));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = with_edit(|doc| doc["nav"][0]["section"] = "pricing".into()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_international_phone_format() {
        let err = with_edit(|doc| doc["contact"]["phone_number"] = "+923057427271".into()).unwrap_err();
        assert!(matches!(err, ContentError::PhoneNumber(_)));
    }
}
