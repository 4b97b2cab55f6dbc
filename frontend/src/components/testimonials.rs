use yew::prelude::*;

use crate::components::icons;
use crate::config::{stagger_delay, REVEAL_THRESHOLD};
use crate::content::Testimonial;
use crate::hooks::{reveal_class, use_carousel, use_reveal};
use crate::interaction::layout::SectionId;
use crate::interaction::rotator::CarouselAction;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let (node, revealed) = use_reveal(REVEAL_THRESHOLD);
    // Manual only; no timer
    let carousel = use_carousel(props.testimonials.len(), None);

    let previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    html! {
        <section id={SectionId::Testimonials.as_str()} class="section section-white">
            <style>
                {r#"
                    .testimonial-stage {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .testimonial-frame {
                        position: relative;
                        height: 350px;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: var(--offwhite);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .testimonial {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        opacity: 0;
                        transition: opacity 0.7s ease-in-out;
                    }
                    .testimonial.current {
                        opacity: 1;
                    }
                    .testimonial img {
                        width: 33%;
                        height: 100%;
                        object-fit: cover;
                        flex-shrink: 0;
                    }
                    .testimonial-body {
                        padding: 2rem;
                    }
                    .stars {
                        display: flex;
                        margin-bottom: 1rem;
                        color: var(--gold);
                    }
                    .testimonial blockquote {
                        margin: 0;
                        font-size: 1.125rem;
                        font-style: italic;
                        line-height: 1.6;
                        color: #374151;
                    }
                    .testimonial-author {
                        margin-top: 1rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 10;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.8);
                        color: var(--charcoal);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                    }
                    .carousel-arrow:hover {
                        background: white;
                    }
                    .carousel-arrow.left { left: -3rem; }
                    .carousel-arrow.right { right: -3rem; }
                    @media (max-width: 768px) {
                        .testimonial-frame { height: 450px; }
                        .testimonial { flex-direction: column; }
                        .testimonial img { width: 100%; height: 50%; }
                        .carousel-arrow.left { left: -1rem; }
                        .carousel-arrow.right { right: -1rem; }
                    }
                "#}
            </style>
            <div ref={node} class="container">
                <div class={reveal_class(revealed)}>
                    <h2 class="section-title centered">{"What Our Customers Say"}</h2>
                    <p class="section-lead">{"Real stories from real users who love their new hair."}</p>
                </div>
                <div class={classes!("testimonial-stage", reveal_class(revealed))} style={stagger_delay(1)}>
                    <div class="testimonial-frame">
                        {
                            props.testimonials.iter().enumerate().map(|(i, t)| html! {
                                <div key={i} class={classes!("testimonial", carousel.is_current(i).then_some("current"))}>
                                    <img src={t.image_url.clone()} alt={t.name.clone()} />
                                    <div class="testimonial-body">
                                        <div class="stars">
                                            { for (0..t.rating).map(|_| icons::star()) }
                                        </div>
                                        <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                        <p class="testimonial-author">{format!("- {}", t.name)}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <button class="carousel-arrow left" aria-label="Previous testimonial" onclick={previous}>
                        {icons::chevron_left()}
                    </button>
                    <button class="carousel-arrow right" aria-label="Next testimonial" onclick={next}>
                        {icons::chevron_right()}
                    </button>
                </div>
            </div>
        </section>
    }
}
