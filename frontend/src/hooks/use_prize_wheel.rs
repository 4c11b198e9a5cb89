use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use shared::prize_catalog::Prize;
use shared::prize_engine::PrizeEngine;
use shared::shared_wheel_game::{
    rotation_at, ResetSignal, WheelGame, WheelPhase, SPIN_DURATION_MS,
};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PrizeWheelHandle {
    pub phase: WheelPhase,
    pub winner: Option<Prize>,
    /// Rotation currently drawn; trails the committed rotation while spinning.
    pub rotation: f64,
    pub spin: Callback<MouseEvent>,
    pub reset: Callback<MouseEvent>,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

// Keeps requesting frames until the settle duration has elapsed
fn animate_rotation(
    slot: FrameSlot,
    displayed: UseStateHandle<f64>,
    from: f64,
    to: f64,
    started_at: f64,
) {
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - started_at;
        displayed.set(rotation_at(from, to, elapsed));
        if elapsed < SPIN_DURATION_MS as f64 {
            animate_rotation(next_slot, displayed, from, to, started_at);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

/// Owns the wheel state machine together with its reveal timer and animation frame.
/// Both handles are dropped, and therefore cancelled, on reset and on unmount.
#[hook]
pub fn use_prize_wheel(
    engine: Rc<PrizeEngine>,
    on_reset: Callback<ResetSignal>,
) -> PrizeWheelHandle {
    let game = use_mut_ref(WheelGame::new);
    let displayed = use_state(|| 0.0_f64);
    let reveal_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let frame: FrameSlot = use_mut_ref(|| None);
    let update = use_force_update();

    {
        let reveal_timer = reveal_timer.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                reveal_timer.borrow_mut().take();
                frame.borrow_mut().take();
            }
        });
    }

    let spin = {
        let game = game.clone();
        let displayed = displayed.clone();
        let reveal_timer = reveal_timer.clone();
        let frame = frame.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(pending) = game.borrow_mut().spin(&engine) else {
                return;
            };

            animate_rotation(
                frame.clone(),
                displayed.clone(),
                pending.from_rotation,
                pending.to_rotation,
                js_sys::Date::now(),
            );

            let ticket = pending.ticket;
            let game = game.clone();
            let reveal_update = update.clone();
            let timeout = Timeout::new(pending.delay_ms, move || {
                if game.borrow_mut().complete_spin(ticket) {
                    reveal_update.force_update();
                }
            });
            *reveal_timer.borrow_mut() = Some(timeout);

            update.force_update();
        })
    };

    let reset = {
        let game = game.clone();
        let displayed = displayed.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            reveal_timer.borrow_mut().take();
            frame.borrow_mut().take();
            let signal = game.borrow_mut().reset();
            displayed.set(0.0);
            update.force_update();
            on_reset.emit(signal);
        })
    };

    let state = game.borrow();
    PrizeWheelHandle {
        phase: state.phase(),
        winner: state.winner.clone(),
        rotation: *displayed,
        spin,
        reset,
    }
}
