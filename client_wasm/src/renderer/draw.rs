use std::f64::consts::PI;

use proto::{Button, Circle, Frame, Rect, Scene};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const TEXT: &str = "#000000";
const ACCENT: &str = "#0095DD";
const BUTTON_TEXT: &str = "#FFFFFF";
const MUTED: &str = "#666666";
const GOLD: &str = "#FFD700";
const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";
const OVERLAY_HINT: &str = "#CCCCCC";

pub fn draw_frame(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    let (w, h) = (frame.width as f64, frame.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    match &frame.scene {
        Scene::Menu {
            title,
            play,
            scoreboard,
            hint,
        } => {
            ctx.set_text_align("center");
            text(ctx, title, w / 2.0, h / 3.0, "48px Arial", TEXT)?;
            button(ctx, play, "24px Arial", 8.0)?;
            button(ctx, scoreboard, "24px Arial", 8.0)?;
            text(ctx, hint, w / 2.0, h - 30.0, "16px Arial", MUTED)
        }
        Scene::Scoreboard {
            title,
            highscores,
            back,
        } => {
            ctx.set_text_align("center");
            text(ctx, title, w / 2.0, 60.0, "36px Arial", TEXT)?;
            if highscores.is_empty() {
                text(ctx, "No scores yet", w / 2.0, h / 2.0, "24px Arial", MUTED)?;
            }
            for (i, score) in highscores.iter().enumerate() {
                let color = if i == 0 { GOLD } else { TEXT };
                let line = format!("{}. {}", i + 1, score);
                text(ctx, &line, w / 2.0, 120.0 + i as f64 * 35.0, "24px Arial", color)?;
            }
            button(ctx, back, "20px Arial", 6.0)
        }
        Scene::Playing {
            ball,
            paddle,
            score,
            highscore,
            paused,
        } => {
            draw_ball(ctx, ball)?;
            fill_rect(ctx, paddle, ACCENT);

            ctx.set_text_align("left");
            text(ctx, &format!("Score: {score}"), 20.0, 30.0, "20px Arial", TEXT)?;
            text(ctx, &format!("Highscore: {highscore}"), 20.0, 60.0, "20px Arial", TEXT)?;

            if *paused {
                fill_rect(ctx, &Rect::new(0.0, 0.0, frame.width, frame.height), OVERLAY);
                ctx.set_text_align("center");
                text(ctx, "PAUSED", w / 2.0, h / 2.0, "48px Arial", BUTTON_TEXT)?;
                text(
                    ctx,
                    "Press SPACE to continue",
                    w / 2.0,
                    h / 2.0 + 50.0,
                    "24px Arial",
                    OVERLAY_HINT,
                )?;
            }
            Ok(())
        }
    }
}

fn draw_ball(ctx: &CanvasRenderingContext2d, ball: &Circle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(ball.x as f64, ball.y as f64, ball.radius as f64, 0.0, PI * 2.0)?;
    ctx.set_fill_style_str(ACCENT);
    ctx.fill();
    ctx.close_path();
    Ok(())
}

/// Filled button with its label centred; `baseline` nudges the text down
fn button(
    ctx: &CanvasRenderingContext2d,
    button: &Button,
    font: &str,
    baseline: f64,
) -> Result<(), JsValue> {
    fill_rect(ctx, &button.rect, ACCENT);
    text(
        ctx,
        &button.label,
        button.rect.center_x() as f64,
        button.rect.center_y() as f64 + baseline,
        font,
        BUTTON_TEXT,
    )
}

fn fill_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
}

fn text(
    ctx: &CanvasRenderingContext2d,
    content: &str,
    x: f64,
    y: f64,
    font: &str,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    ctx.fill_text(content, x, y)
}
