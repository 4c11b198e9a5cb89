use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BrandHeaderProps {
    pub title: AttrValue,
}

#[function_component(BrandHeader)]
pub fn brand_header(props: &BrandHeaderProps) -> Html {
    html! {
        <div class="flex items-center justify-center mb-4">
            <div class={styles::BRAND_BADGE}>
                <span class="text-white font-bold text-xl">{"TB"}</span>
            </div>
            <div>
                <h1 class={styles::BRAND_TITLE}>{props.title.clone()}</h1>
                <p class={styles::BRAND_SUBTITLE}>{"PRESENTED BY CULVER'S"}</p>
            </div>
        </div>
    }
}
