use std::rc::Rc;

use log::{error, info};

mod config;
mod content;
mod hooks;
mod interaction {
    pub mod active_section;
    pub mod layout;
    pub mod reveal;
    pub mod rotator;
    pub mod selection;
}
mod components {
    pub mod benefits;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod order_cta;
    pub mod products;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use content::SiteContent;
use pages::landing::{Landing, LandingProps, Unavailable};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Starting storefront: {} slides, {} products, {} testimonials",
                content.slides.len(),
                content.products.len(),
                content.testimonials.len()
            );
            let props = LandingProps {
                content: Rc::new(content),
            };
            yew::Renderer::<Landing>::with_props(props).render();
        }
        Err(e) => {
            error!("Site content rejected: {}", e);
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}
