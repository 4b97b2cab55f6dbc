use yew::prelude::*;

use crate::content::BenefitIcon;

fn outline(class: &'static str, path: &'static str) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class={class} fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d={path} />
        </svg>
    }
}

const LEAF: &str = "M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0l3.181 3.183a8.25 8.25 0 0011.667 0l3.181-3.183m-4.991-2.691L12 15";
const SHIELD: &str = "M9 12.75L11.25 15 15 9.75m-3-7.036A11.959 11.959 0 013.598 6 11.99 11.99 0 003 9.749c0 5.592 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.31-.21-2.571-.598-3.751h-.152c-3.196 0-6.1-1.248-8.25-3.286zm0 13.036h.008v.008h-.008v-.008z";
const DROPLET: &str = "M15.362 5.214A8.252 8.252 0 0112 21 8.25 8.25 0 016.038 7.048l8.28-8.28.012.012z";
const QUESTION: &str = "M9.879 7.519c1.171-1.025 3.071-1.025 4.242 0 1.172 1.025 1.172 2.687 0 3.712-.203.179-.43.326-.67.442-.745.361-1.45.999-1.45 1.827v.75M21 12a9 9 0 11-18 0 9 9 0 0118 0zm-9 5.25h.008v.008H12v-.008z";
const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const CLOSE: &str = "M6 18L18 6M6 6l12 12";
const CHEVRON_LEFT: &str = "M15 19l-7-7 7-7";
const CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";
const STAR: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";
const CHECK: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";
const WHATSAPP: &str = "M.057 24l1.687-6.163c-1.041-1.804-1.588-3.849-1.587-5.946.003-6.556 5.338-11.891 11.893-11.891 3.181.001 6.167 1.24 8.413 3.488 2.245 2.248 3.481 5.236 3.48 8.414-.003 6.557-5.338 11.892-11.893 11.892-1.99-.001-3.951-.5-5.688-1.448l-6.305 1.654zm6.597-3.807c1.676.995 3.276 1.591 5.392 1.592 5.448 0 9.886-4.434 9.889-9.885.002-5.462-4.415-9.89-9.881-9.892-5.452 0-9.887 4.434-9.889 9.884-.001 2.225.651 3.891 1.746 5.634l-.999 3.648 3.742-.981zm11.387-5.464c-.074-.124-.272-.198-.57-.347-.297-.149-1.758-.868-2.031-.967-.272-.099-.47-.149-.669.149-.198.297-.768.967-.941 1.165-.173.198-.347.223-.644.074-.297-.149-1.255-.462-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.297-.347.446-.521.151-.172.2-.296.3-.495.099-.198.05-.371-.025-.521-.075-.148-.669-1.611-.916-2.206-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01s-.521.074-.792.372c-.272.296-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.695.248-1.29.173-1.414z";

pub fn benefit(icon: BenefitIcon) -> Html {
    let path = match icon {
        BenefitIcon::Droplet => DROPLET,
        BenefitIcon::Shield => SHIELD,
        BenefitIcon::Leaf => LEAF,
    };
    outline("icon-lg", path)
}

pub fn leaf() -> Html {
    outline("icon-md", LEAF)
}

pub fn instructions() -> Html {
    outline("icon-md", QUESTION)
}

pub fn phone() -> Html {
    outline("icon-md", PHONE)
}

pub fn close() -> Html {
    outline("icon-lg", CLOSE)
}

pub fn chevron_left() -> Html {
    outline("icon-md", CHEVRON_LEFT)
}

pub fn chevron_right() -> Html {
    outline("icon-md", CHEVRON_RIGHT)
}

pub fn star() -> Html {
    html! {
        <svg class="icon-star" fill="currentColor" viewBox="0 0 20 20">
            <path d={STAR} />
        </svg>
    }
}

pub fn check() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="icon-sm" viewBox="0 0 20 20" fill="currentColor">
            <path fill-rule="evenodd" clip-rule="evenodd" d={CHECK} />
        </svg>
    }
}

pub fn whatsapp() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="icon-md" fill="currentColor" viewBox="0 0 24 24">
            <path d={WHATSAPP} />
        </svg>
    }
}
