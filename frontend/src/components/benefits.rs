use yew::prelude::*;

use crate::components::icons;
use crate::config::{stagger_delay, REVEAL_THRESHOLD};
use crate::content::Benefit;
use crate::hooks::{reveal_class, use_reveal};
use crate::interaction::layout::SectionId;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub brand_name: String,
    pub benefits: Vec<Benefit>,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    let (node, revealed) = use_reveal(REVEAL_THRESHOLD);

    html! {
        <section id={SectionId::About.as_str()} class="section section-white">
            <style>
                {r#"
                    .benefit-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 3rem;
                    }
                    .benefit {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .benefit-icon {
                        padding: 1rem;
                        margin-bottom: 1rem;
                        border-radius: 50%;
                        background: var(--light-gray);
                        color: var(--gold);
                    }
                    .benefit h3 {
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                "#}
            </style>
            <div ref={node} class="container centered">
                <div class={reveal_class(revealed)}>
                    <h2 class="section-title">{"Purely Natural, Powerfully Effective"}</h2>
                    <p class="section-lead">
                        {format!("{} is crafted from a blend of nature's finest ingredients to give your hair the care it deserves.", props.brand_name)}
                    </p>
                </div>
                <div class="benefit-grid">
                    {
                        props.benefits.iter().enumerate().map(|(i, benefit)| html! {
                            <div key={i} class={classes!("benefit", reveal_class(revealed))} style={stagger_delay(i)}>
                                <div class="benefit-icon">{icons::benefit(benefit.icon)}</div>
                                <h3>{&benefit.title}</h3>
                                <p class="muted">{&benefit.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
