use yew::prelude::*;

use crate::components::icons;
use crate::config::{stagger_delay, REVEAL_THRESHOLD};
use crate::content::Product;
use crate::hooks::{reveal_class, use_reveal};
use crate::interaction::layout::{scroll_to_section, SectionId};
use crate::interaction::selection::{Selection, SelectionAction};

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
    brand_name: String,
    revealed: bool,
    index: usize,
    on_details: Callback<()>,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let ProductCardProps { product, brand_name, revealed, index, on_details } = props;
    let onclick = on_details.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("product-card", reveal_class(*revealed))} style={stagger_delay(*index)}>
            <div class="product-card-image">
                <img src={product.image_url.clone()} alt={format!("{} Hair Oil {}", brand_name, product.size)} />
            </div>
            <div class="product-card-body">
                <div>
                    <h3>{format!("{} Hair Oil", brand_name)}</h3>
                    <p class="muted">{&product.size}</p>
                    <p class="price">{&product.price}</p>
                </div>
                <button class="button-dark" {onclick}>{"View Details"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductModalProps {
    product: Product,
    brand_name: String,
    on_close: Callback<()>,
    on_order: Callback<()>,
}

#[function_component(ProductModal)]
fn product_modal(props: &ProductModalProps) -> Html {
    let ProductModalProps { product, brand_name, on_close, on_order } = props;
    let title = format!("{} Hair Oil ({})", brand_name, product.size);

    html! {
        <div class="modal-backdrop fade-in-up" role="dialog" aria-modal="true">
            <div class="modal">
                <button class="modal-close" aria-label="Close" onclick={on_close.reform(|_: MouseEvent| ())}>
                    {icons::close()}
                </button>
                <div class="modal-image">
                    <img src={product.image_url.clone()} alt={format!("{} Hair Oil {}", brand_name, product.size)} />
                </div>
                <div class="modal-details">
                    <h2>{title}</h2>
                    <p class="price">{&product.price}</p>
                    <div class="modal-facts">
                        <div>
                            <h4>{icons::check()}{"Key Benefits"}</h4>
                            <ul>
                                {
                                    product.key_benefits.iter().map(|benefit| html! {
                                        <li key={benefit.clone()}><span class="bullet">{"•"}</span>{benefit}</li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                        <div>
                            <h4>{icons::instructions()}{"How to Use"}</h4>
                            <p>{&product.how_to_use}</p>
                        </div>
                        <div>
                            <h4>{icons::leaf()}{"Ingredients"}</h4>
                            <p class="italic">{&product.ingredients}</p>
                        </div>
                    </div>
                    <button class="button-gold wide" onclick={on_order.reform(|_: MouseEvent| ())}>
                        {"Order Now"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub brand_name: String,
    pub products: Vec<Product>,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let (node, revealed) = use_reveal(REVEAL_THRESHOLD);
    let selection = use_reducer(Selection::default);

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::Close))
    };

    let on_order = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            scroll_to_section(SectionId::Order);
            selection.dispatch(SelectionAction::OrderNow);
        })
    };

    html! {
        <>
            <section id={SectionId::Products.as_str()} class="section section-offwhite">
                <style>
                    {r#"
                        .product-grid {
                            max-width: 56rem;
                            margin: 0 auto;
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                            gap: 2.5rem;
                        }
                        .product-card {
                            display: flex;
                            flex-direction: column;
                            background: white;
                            border-radius: 0.5rem;
                            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        }
                        .product-card:hover {
                            transform: scale(1.05);
                            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        }
                        .product-card-image {
                            height: 24rem;
                            background: var(--light-gray);
                            overflow: hidden;
                        }
                        .product-card-image img {
                            width: 100%;
                            height: 100%;
                            object-fit: contain;
                            padding: 2rem;
                            box-sizing: border-box;
                            transition: transform 0.3s;
                        }
                        .product-card:hover .product-card-image img {
                            transform: scale(1.1);
                        }
                        .product-card-body {
                            flex-grow: 1;
                            display: flex;
                            flex-direction: column;
                            justify-content: space-between;
                            padding: 1.5rem;
                            text-align: center;
                        }
                        .product-card-body h3 {
                            font-family: var(--font-serif);
                            font-size: 1.5rem;
                            margin: 0;
                        }
                        .price {
                            font-size: 1.875rem;
                            font-weight: 700;
                            color: var(--gold);
                            margin: 0.75rem 0;
                        }
                        .modal-backdrop {
                            position: fixed;
                            inset: 0;
                            z-index: 50;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 1rem;
                            background: rgba(0, 0, 0, 0.7);
                            animation-duration: 0.3s;
                        }
                        .modal {
                            position: relative;
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                            gap: 2rem;
                            max-width: 56rem;
                            width: 100%;
                            max-height: 90vh;
                            overflow-y: auto;
                            padding: 2rem;
                            background: white;
                            border-radius: 0.5rem;
                            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        }
                        .modal-close {
                            position: absolute;
                            top: 1rem;
                            right: 1rem;
                            background: none;
                            border: none;
                            color: #9ca3af;
                            cursor: pointer;
                        }
                        .modal-close:hover {
                            color: #1f2937;
                        }
                        .modal-image {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            min-height: 20rem;
                            padding: 1rem;
                            background: var(--light-gray);
                            border-radius: 0.5rem;
                        }
                        .modal-image img {
                            max-height: 100%;
                            max-width: 100%;
                            object-fit: contain;
                        }
                        .modal-details {
                            display: flex;
                            flex-direction: column;
                        }
                        .modal-details h2 {
                            font-family: var(--font-serif);
                            font-size: 1.875rem;
                            margin: 0;
                        }
                        .modal-facts {
                            margin: 1rem 0 1.5rem;
                            font-size: 0.875rem;
                            color: #374151;
                        }
                        .modal-facts h4 {
                            display: flex;
                            align-items: center;
                            gap: 0.5rem;
                            font-size: 1.125rem;
                            margin: 1rem 0 0.5rem;
                            color: var(--charcoal);
                        }
                        .modal-facts ul {
                            list-style: none;
                            padding: 0;
                            margin: 0;
                        }
                        .bullet {
                            color: var(--gold);
                            margin-right: 0.5rem;
                        }
                    "#}
                </style>
                <div ref={node} class="container">
                    <div class={reveal_class(revealed)}>
                        <h2 class="section-title centered">{"Choose Your Perfect Size"}</h2>
                    </div>
                    <div class="product-grid">
                        {
                            props.products.iter().enumerate().map(|(i, product)| {
                                let on_details = {
                                    let selection = selection.clone();
                                    Callback::from(move |_: ()| selection.dispatch(SelectionAction::Select(i)))
                                };
                                html! {
                                    <ProductCard
                                        key={product.size.clone()}
                                        product={product.clone()}
                                        brand_name={props.brand_name.clone()}
                                        {revealed}
                                        index={i}
                                        {on_details}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            {
                if let Some(product) = selection.resolve(&props.products) {
                    html! {
                        <ProductModal
                            product={product.clone()}
                            brand_name={props.brand_name.clone()}
                            {on_close}
                            {on_order}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
