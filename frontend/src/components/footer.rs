use chrono::Datelike;
use yew::prelude::*;

use crate::components::header::brand_mark;
use crate::content::{Brand, Credit};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub owner: String,
    pub credit: Credit,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: var(--charcoal);
                        color: var(--offwhite);
                    }
                    .footer-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 2rem 1.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-brand {
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        margin: 0;
                    }
                    .site-footer a {
                        color: white;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        text-decoration: underline;
                    }
                "#}
            </style>
            <div class="container footer-row">
                <div>
                    <h3 class="footer-brand">{brand_mark(&props.brand)}</h3>
                    <p class="muted">{format!("© {} All Rights Reserved.", year)}</p>
                </div>
                <div>
                    <p>{"Business Owner: "}<strong>{&props.owner}</strong></p>
                    <p class="muted">
                        {"Website Developed by "}
                        <a href={format!("mailto:{}", props.credit.email)}>{&props.credit.name}</a>
                    </p>
                </div>
            </div>
        </footer>
    }
}
