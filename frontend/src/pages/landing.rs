use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    benefits::Benefits, footer::Footer, header::Header, hero::Hero, order_cta::OrderCta,
    products::Products, testimonials::Testimonials,
};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let brand_name = format!("{} {}", content.brand.name, content.brand.accent);

    html! {
        <div class="site">
            <style>
                {r#"
                    :root {
                        --gold: #c5a47e;
                        --dark-gold: #a98b68;
                        --charcoal: #333333;
                        --offwhite: #faf7f2;
                        --light-gray: #f3f4f6;
                        --font-serif: 'Playfair Display', serif;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                    }
                    .site {
                        min-height: 100vh;
                        background: var(--offwhite);
                        color: var(--charcoal);
                        font-family: 'Lato', sans-serif;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .centered { text-align: center; }
                    .muted { color: #6b7280; }
                    .italic { font-style: italic; }
                    .brand-accent { color: var(--gold); }
                    .section {
                        padding: 5rem 0;
                        overflow: hidden;
                    }
                    .section-white { background: white; }
                    .section-offwhite { background: var(--offwhite); }
                    .section-title {
                        font-family: var(--font-serif);
                        font-size: 2.25rem;
                        margin: 0 0 1rem;
                    }
                    .section-lead {
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        color: #4b5563;
                        text-align: center;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 0.7s;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .fade-in-up {
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .button-gold, .button-dark {
                        border: none;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .button-gold {
                        padding: 0.75rem 2rem;
                        background: var(--gold);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .button-gold:hover {
                        background: var(--dark-gold);
                        transform: scale(1.05);
                    }
                    .button-gold.wide {
                        width: 100%;
                        margin-top: auto;
                    }
                    .button-dark {
                        width: 100%;
                        margin-top: 1rem;
                        padding: 0.5rem 1.5rem;
                        background: var(--charcoal);
                    }
                    .product-card:hover .button-dark {
                        background: var(--gold);
                    }
                    .icon-sm { width: 1.25rem; height: 1.25rem; color: var(--gold); flex-shrink: 0; }
                    .icon-md { width: 1.5rem; height: 1.5rem; }
                    .icon-lg { width: 3rem; height: 3rem; }
                    .icon-star { width: 1.25rem; height: 1.25rem; }
                    .modal-facts .icon-md { color: var(--gold); }
                "#}
            </style>
            <Header brand={content.brand.clone()} links={content.nav.clone()} />
            <main>
                <Hero slides={content.slides.clone()} />
                <Benefits brand_name={brand_name.clone()} benefits={content.benefits.clone()} />
                <Products brand_name={brand_name} products={content.products.clone()} />
                <Testimonials testimonials={content.testimonials.clone()} />
                <OrderCta contact={content.contact.clone()} />
            </main>
            <Footer
                brand={content.brand.clone()}
                owner={content.contact.owner.clone()}
                credit={content.credit.clone()}
            />
        </div>
    }
}

/// Shown instead of the page when the embedded content fails validation.
#[function_component(Unavailable)]
pub fn unavailable() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; font-family: sans-serif; color: #333;">
            <p>{"This page is temporarily unavailable. Please try again later."}</p>
        </div>
    }
}
