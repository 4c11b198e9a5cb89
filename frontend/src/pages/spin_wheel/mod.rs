mod wheel_canvas;
mod wheel_utils;

use std::rc::Rc;

use shared::prize_engine::PrizeEngine;
use shared::shared_wheel_game::{ResetSignal, WheelPhase};
use shared::user_info::UserInfo;
use yew::prelude::*;

use crate::components::{BrandHeader, StadiumBackground};
use crate::hooks::use_prize_wheel;
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{SpinButton, WinnerModal};

#[derive(Properties, PartialEq)]
pub struct SpinWheelPageProps {
    pub user: UserInfo,
    pub engine: Rc<PrizeEngine>,
    pub on_reset: Callback<ResetSignal>,
}

#[function_component(SpinWheelPage)]
pub fn spin_wheel_page(props: &SpinWheelPageProps) -> Html {
    let wheel = use_prize_wheel(props.engine.clone(), props.on_reset.clone());
    let is_spinning = wheel.phase == WheelPhase::Spinning;

    html! {
        <StadiumBackground>
            <div class="flex flex-col items-center">
                <BrandHeader title={format!("Welcome, {}!", props.user.first_name)} />
                <p class={classes!(styles::TEXT_BODY, "text-center", "mb-8")}>
                    {"Spin the wheel to discover your prize!"}
                </p>

                <WheelCanvas
                    engine={props.engine.clone()}
                    rotation={wheel.rotation}
                    {is_spinning}
                />

                if wheel.phase != WheelPhase::Revealed {
                    <SpinButton {is_spinning} onclick={wheel.spin.clone()} />
                }

                <button onclick={wheel.reset.clone()} class={styles::BUTTON_LINK}>
                    <span>{"←"}</span>
                    <span>{"Start Over"}</span>
                </button>
            </div>

            if let Some(prize) = wheel.winner.clone() {
                <WinnerModal
                    {prize}
                    email={props.user.email.clone()}
                    on_play_again={wheel.reset.clone()}
                />
            }
        </StadiumBackground>
    }
}
