use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{Brand, NavLink};
use crate::hooks::use_active_section;
use crate::interaction::layout::{scroll_to_section, SectionId};

pub fn brand_mark(brand: &Brand) -> Html {
    html! {
        <>
            {&brand.name}{" "}<span class="brand-accent">{&brand.accent}</span>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
}

fn nav_buttons(links: &[NavLink], active: SectionId, on_pick: &Callback<SectionId>) -> Html {
    links
        .iter()
        .map(|link| {
            let section = link.section;
            let onclick = on_pick.reform(move |_: MouseEvent| section);
            html! {
                <button
                    key={section.as_str()}
                    class={classes!("nav-link", (section == active).then_some("active"))}
                    {onclick}
                >
                    {&link.label}
                </button>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_bool_toggle(false);
    let active = use_active_section(props.links.iter().map(|link| link.section).collect());

    let on_pick = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: SectionId| {
            scroll_to_section(section);
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    let burger_path = if *menu_open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16m-7 6h7"
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(250, 247, 242, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .header-bar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1.5rem;
                    }
                    .header-brand {
                        font-family: var(--font-serif);
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        background: none;
                        border: none;
                        font: inherit;
                        font-weight: 500;
                        color: var(--charcoal);
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        width: 100%;
                        height: 2px;
                        background: var(--gold);
                        transform: scaleX(0);
                        transition: transform 0.3s;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: var(--gold);
                    }
                    .nav-link.active::after {
                        transform: scaleX(1);
                    }
                    .burger {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--charcoal);
                        cursor: pointer;
                    }
                    .mobile-nav {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem 0;
                        background: var(--offwhite);
                    }
                    .mobile-nav .nav-link::after {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav { display: none; }
                        .burger { display: block; }
                    }
                    @media (min-width: 769px) {
                        .mobile-nav { display: none; }
                    }
                "#}
            </style>
            <div class="container header-bar">
                <h1 class="header-brand">{brand_mark(&props.brand)}</h1>
                <nav class="desktop-nav">
                    {nav_buttons(&props.links, active, &on_pick)}
                </nav>
                <button class="burger" aria-label="Toggle menu" onclick={toggle_menu}>
                    <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={burger_path} />
                    </svg>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="mobile-nav">
                            {nav_buttons(&props.links, active, &on_pick)}
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
