use shared::prize_catalog::Prize;
use yew::prelude::*;

use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed"
    } else {
        "bg-gradient-to-r from-blue-500 to-blue-600 hover:from-blue-600 hover:to-blue-700 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(
                "mt-8",
                "px-12",
                "py-4",
                "rounded-full",
                "text-white",
                "font-bold",
                "text-xl",
                "tracking-wide",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-blue-300",
                button_class
            )}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{if props.is_spinning { "Spinning..." } else { "SPIN NOW!" }}</span>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerModalProps {
    pub prize: Prize,
    pub email: AttrValue,
    pub on_play_again: Callback<MouseEvent>,
}

/// Shown once the presentation delay has elapsed.
#[function_component(WinnerModal)]
pub fn winner_modal(props: &WinnerModalProps) -> Html {
    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_CARD}>
                <div class="text-6xl mb-4">{"🎉"}</div>
                <h2 class="text-3xl font-bold text-gray-900 mb-2">{"Congratulations!"}</h2>
                <p class="text-xl text-gray-700 mb-4">
                    {"You won "}
                    <span class="font-bold text-blue-600">{props.prize.display_name()}</span>
                </p>
                <p class="text-gray-600 mb-6">
                    {format!(
                        "We'll contact you at {} with details about claiming your prize.",
                        props.email
                    )}
                </p>
                <button onclick={props.on_play_again.clone()} class={styles::BUTTON_PRIMARY}>
                    {"Play Again"}
                </button>
            </div>
        </div>
    }
}
