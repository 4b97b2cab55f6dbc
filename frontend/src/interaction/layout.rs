use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Anchored page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Products,
    Testimonials,
    Order,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Testimonials => "testimonials",
            SectionId::Order => "order",
        }
    }
}

/// Vertical geometry of the page as seen by the active-section tracker.
pub trait SectionLayout {
    /// Top offset of the section in document coordinates, `None` if it is not mounted.
    fn offset_top(&self, section: SectionId) -> Option<f64>;
    fn scroll_y(&self) -> f64;
}

/// The live document. Every lookup of a section element by id goes through here.
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, section: SectionId) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(section.as_str())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Smooth-scrolls the section into view. Returns false when it is not mounted.
    pub fn scroll_to(&self, section: SectionId) -> bool {
        match self.element(section) {
            Some(el) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

impl SectionLayout for DomLayout {
    fn offset_top(&self, section: SectionId) -> Option<f64> {
        self.element(section).map(|el| f64::from(el.offset_top()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

pub fn scroll_to_section(section: SectionId) {
    let scrolled = DomLayout::current().map_or(false, |layout| layout.scroll_to(section));
    if !scrolled {
        log::debug!("section #{} is not mounted, skipping scroll", section.as_str());
    }
}
