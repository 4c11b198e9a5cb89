use std::f64::consts::PI;
use std::rc::Rc;

use shared::prize_catalog::Prize;
use shared::prize_engine::PrizeEngine;
use shared::shared_wheel_game::{label_angle, segment_span};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 450;
const SEGMENT_STROKE: &str = "#374151";
const RIM_COLOR: &str = "#d1d5db";
const HUB_COLOR: &str = "#1d4ed8";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub engine: Rc<PrizeEngine>,
    pub rotation: f64,
    pub is_spinning: bool,
}

// Wheel degrees are clockwise from 12 o'clock; canvas radians start at 3 o'clock
fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn draw_segment(
    context: &CanvasRenderingContext2d,
    radius: f64,
    index: usize,
    count: usize,
    prize: &Prize,
) {
    let (start, end) = segment_span(index, count);
    context.begin_path();
    context.move_to(0.0, 0.0);
    let _ = context.arc(0.0, 0.0, radius, to_canvas_radians(start), to_canvas_radians(end));
    context.close_path();
    context.set_fill_style_str(&prize.color);
    context.fill();
    context.set_stroke_style_str(SEGMENT_STROKE);
    context.set_line_width(2.0);
    context.stroke();
}

fn draw_label(
    context: &CanvasRenderingContext2d,
    radius: f64,
    index: usize,
    count: usize,
    prize: &Prize,
) {
    let (first, second) = prize.label_lines();

    context.save();
    // Text runs outward along the segment's centre line
    let _ = context.rotate(to_canvas_radians(label_angle(index, count)));
    context.set_fill_style_str(prize.ink_color());
    context.set_text_align("center");
    context.set_text_baseline("middle");

    context.set_font("bold 14px 'Segoe UI', Roboto, system-ui, sans-serif");
    let _ = context.fill_text(&first.to_uppercase(), radius * 0.5, 0.0);
    if let Some(second) = second {
        context.set_font("bold 12px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(&second.to_uppercase(), radius * 0.72, 0.0);
    }
    context.restore();
}

fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, top: f64) {
    context.begin_path();
    context.move_to(center_x - 14.0, top - 6.0);
    context.line_to(center_x + 14.0, top - 6.0);
    context.line_to(center_x, top + 22.0);
    context.close_path();
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(6.0);
    context.fill();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

/// Draws every segment and label from the catalog, rotated by `rotation` degrees,
/// with the pointer fixed at the top.
pub fn draw_wheel(
    context: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    prizes: &[Prize],
    rotation: f64,
    is_spinning: bool,
) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let count = prizes.len();

    context.clear_rect(0.0, 0.0, width, height);

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);

    for (index, prize) in prizes.iter().enumerate() {
        draw_segment(context, radius, index, count, prize);
    }
    for (index, prize) in prizes.iter().enumerate() {
        draw_label(context, radius, index, count, prize);
    }
    context.restore();

    // Rim
    context.begin_path();
    context.set_stroke_style_str(RIM_COLOR);
    context.set_line_width(if is_spinning { 10.0 } else { 8.0 });
    let _ = context.arc(center_x, center_y, radius + 4.0, 0.0, 2.0 * PI);
    context.stroke();

    // Hub
    context.begin_path();
    context.set_fill_style_str(HUB_COLOR);
    let _ = context.arc(center_x, center_y, radius * 0.22, 0.0, 2.0 * PI);
    context.fill();
    context.set_fill_style_str("#ffffff");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_font("italic bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
    let _ = context.fill_text("Culver's", center_x, center_y);

    draw_pointer(context, center_x, center_y - radius - 4.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.engine.clone(), props.rotation, props.is_spinning),
            move |(engine, rotation, is_spinning)| {
                let context = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| {
                        canvas.get_context("2d").ok().flatten().map(|c| (canvas, c))
                    })
                    .and_then(|(canvas, c)| {
                        c.dyn_into::<CanvasRenderingContext2d>().ok().map(|c| (canvas, c))
                    });

                match context {
                    Some((canvas, context)) => draw_wheel(
                        &context,
                        canvas.width() as f64,
                        canvas.height() as f64,
                        engine.catalog().prizes(),
                        *rotation,
                        *is_spinning,
                    ),
                    None => log::warn!("Wheel canvas has no 2d context"),
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-80 h-80 md:w-96 md:h-96 lg:w-[450px] lg:h-[450px] rounded-full shadow-2xl"
        />
    }
}
