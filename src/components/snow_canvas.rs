//! Snow Canvas Component
//!
//! Full-window canvas of falling snow, redrawn every animation frame.

use std::f64::consts::TAU;

use leptos::ev;
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use checklist_core::Snowfall;

use crate::browser::BrowserRandom;

fn window_size() -> (f64, f64) {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn draw(ctx: &CanvasRenderingContext2d, snow: &Snowfall) {
    let (width, height) = snow.size();
    ctx.clear_rect(0.0, 0.0, width, height);
    for flake in snow.flakes() {
        ctx.begin_path();
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {:.2})", flake.opacity));
        let _ = ctx.arc(flake.x, flake.y, flake.radius, 0.0, TAU);
        ctx.fill();
    }
}

fn frame(ctx: CanvasRenderingContext2d, snow: StoredValue<Snowfall>) {
    if snow.is_disposed() {
        return;
    }
    snow.update_value(|snow| {
        draw(&ctx, snow);
        snow.step(&BrowserRandom);
    });
    request_animation_frame(move || frame(ctx, snow));
}

#[component]
pub fn SnowCanvas(count: usize) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let (width, height) = window_size();
    let snow = StoredValue::new(Snowfall::new(width, height, count, &BrowserRandom));

    let fit_canvas = move || {
        let (width, height) = window_size();
        if let Some(canvas) = canvas_ref.get_untracked() {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
        }
        snow.update_value(|snow| snow.resize(width, height));
    };

    let _resize = window_event_listener(ev::resize, move |_| fit_canvas());

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        fit_canvas();
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
        match ctx {
            Some(ctx) => frame(ctx, snow),
            None => log::warn!("[SNOW] 2d context unavailable"),
        }
    });

    view! { <canvas class="snow-canvas" node_ref=canvas_ref></canvas> }
}
