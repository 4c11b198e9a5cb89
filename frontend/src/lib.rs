pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use std::rc::Rc;

use shared::prize_engine::PrizeEngine;
use shared::session::{PromoSession, SessionPhase};
use shared::shared_wheel_game::ResetSignal;
use shared::user_info::UserInfo;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{intake::IntakePage, spin_wheel::SpinWheelPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Intake,
    #[at("/spin")]
    Wheel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let engine = use_memo((), |_| PrizeEngine::new(config::load_catalog()));

    html! {
        <BrowserRouter>
            <PromoShell engine={engine} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct PromoShellProps {
    pub engine: Rc<PrizeEngine>,
}

/// Owns the session and moves between intake and the wheel.
#[function_component(PromoShell)]
pub fn promo_shell(props: &PromoShellProps) -> Html {
    let session = use_state(PromoSession::new);
    let navigator = use_navigator();

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |user: UserInfo| {
            let mut next = (*session).clone();
            if !next.accept(user) {
                return;
            }
            session.set(next);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Wheel);
            }
        })
    };

    let on_reset = {
        let session = session.clone();
        Callback::from(move |signal: ResetSignal| {
            let mut next = (*session).clone();
            next.handle_reset(signal);
            session.set(next);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Intake);
            }
        })
    };

    let render = {
        let phase = session.phase();
        let user = session.user().cloned();
        let engine = props.engine.clone();
        move |route: Route| match route {
            // Intake reopens only after the wheel signals a reset
            Route::Intake if phase == SessionPhase::Wheel => {
                html! { <Redirect<Route> to={Route::Wheel} /> }
            }
            Route::Intake => html! { <IntakePage on_submit={on_submit.clone()} /> },
            Route::Wheel => match &user {
                Some(user) => html! {
                    <SpinWheelPage
                        user={user.clone()}
                        engine={engine.clone()}
                        on_reset={on_reset.clone()}
                    />
                },
                None => html! { <Redirect<Route> to={Route::Intake} /> },
            },
            Route::NotFound => html! { <Redirect<Route> to={Route::Intake} /> },
        }
    };

    html! {
        <Switch<Route> render={Callback::from(render)} />
    }
}
