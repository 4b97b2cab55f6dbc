use yew::prelude::*;

use crate::components::icons;
use crate::config::ORDER_REVEAL_THRESHOLD;
use crate::content::Contact;
use crate::hooks::{reveal_class, use_reveal};
use crate::interaction::layout::SectionId;

#[derive(Properties, PartialEq)]
pub struct OrderCtaProps {
    pub contact: Contact,
}

#[function_component(OrderCta)]
pub fn order_cta(props: &OrderCtaProps) -> Html {
    let (node, revealed) = use_reveal(ORDER_REVEAL_THRESHOLD);
    let contact = &props.contact;

    html! {
        <section id={SectionId::Order.as_str()} class="section section-white">
            <style>
                {r#"
                    .order-panel {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 0.75rem;
                        background: var(--offwhite);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .order-contact {
                        margin-bottom: 2rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: white;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
                    }
                    .order-phone {
                        font-size: 2.25rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        margin: 0.5rem 0;
                    }
                    .order-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .order-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 700;
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .order-link.whatsapp { background: #22c55e; }
                    .order-link.whatsapp:hover { background: #16a34a; }
                    .order-link.call { background: var(--charcoal); }
                    .order-link.call:hover { background: #1f2937; }
                "#}
            </style>
            <div ref={node} class="container centered">
                <div class={classes!("order-panel", reveal_class(revealed))}>
                    <h2 class="section-title">{"Ready for Healthier Hair?"}</h2>
                    <p class="section-lead">{"Place your order today by contacting us directly. We're here to help!"}</p>
                    <div class="order-contact">
                        <p>{"Business Owner: "}<strong>{&contact.owner}</strong></p>
                        <p class="order-phone">{&contact.phone_number}</p>
                    </div>
                    <div class="order-actions">
                        <a class="order-link whatsapp" href={contact.whatsapp_link()} target="_blank" rel="noopener noreferrer">
                            {icons::whatsapp()}{"Order on WhatsApp"}
                        </a>
                        <a class="order-link call" href={contact.tel_link()}>
                            {icons::phone()}{"Call to Order"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
