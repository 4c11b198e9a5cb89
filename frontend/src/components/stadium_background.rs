use yew::prelude::*;

use crate::styles;

const CROWD_IMAGE: &str = "https://images.pexels.com/photos/114296/pexels-photo-114296.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop";

#[derive(Properties, PartialEq)]
pub struct StadiumBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Dimmed crowd backdrop shared by the intake and wheel pages.
#[function_component(StadiumBackground)]
pub fn stadium_background(props: &StadiumBackgroundProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            <div
                class={styles::PAGE_CROWD}
                style={format!("background-image: url('{}')", CROWD_IMAGE)}
            />
            <div class={styles::PAGE_OVERLAY} />
            <div class={styles::PAGE_CONTENT}>
                {props.children.clone()}
            </div>
        </div>
    }
}
