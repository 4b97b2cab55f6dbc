use yew::prelude::*;

use crate::config::HERO_INTERVAL_MS;
use crate::content::Slide;
use crate::hooks::use_carousel;
use crate::interaction::layout::{scroll_to_section, SectionId};
use crate::interaction::rotator::CarouselAction;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub slides: Vec<Slide>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let carousel = use_carousel(props.slides.len(), Some(HERO_INTERVAL_MS));
    let current = carousel.index();

    let discover = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Products));

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        overflow: hidden;
                    }
                    .hero-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0;
                        transition: opacity 1s ease-in-out;
                    }
                    .hero-image.current {
                        opacity: 1;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: black;
                        opacity: 0.5;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .hero-copy {
                        min-height: 200px;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .hero-copy h2 {
                        font-family: var(--font-serif);
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        margin: 0 0 1rem;
                        text-shadow: 0 4px 8px rgba(0, 0, 0, 0.4);
                    }
                    .hero-copy p {
                        font-size: clamp(1.125rem, 2.5vw, 1.5rem);
                        font-weight: 300;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .hero-cta {
                        margin-top: 2rem;
                        animation-delay: 0.3s;
                    }
                    .hero-dots {
                        position: absolute;
                        z-index: 20;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.75rem;
                    }
                    .hero-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .hero-dot:hover {
                        background: white;
                    }
                    .hero-dot.current {
                        background: white;
                        transform: scale(1.25);
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                {
                    props.slides.iter().enumerate().map(|(i, slide)| html! {
                        <img
                            key={i}
                            src={slide.image_url.clone()}
                            alt={slide.alt.clone()}
                            class={classes!("hero-image", carousel.is_current(i).then_some("current"))}
                        />
                    }).collect::<Html>()
                }
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <div class="hero-copy">
                    {
                        if let Some(slide) = props.slides.get(current) {
                            // Keyed on the index so the text animates again on every change
                            html! {
                                <div key={current} class="fade-in-up">
                                    <h2>{&slide.title}</h2>
                                    <p>{&slide.subtitle}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="hero-cta fade-in-up">
                    <button class="button-gold" onclick={discover}>
                        {"Discover Our Products"}
                    </button>
                </div>
            </div>
            <div class="hero-dots">
                {
                    (0..props.slides.len()).map(|i| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                        };
                        html! {
                            <button
                                key={i}
                                class={classes!("hero-dot", carousel.is_current(i).then_some("current"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
