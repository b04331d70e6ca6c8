//! Canvas2D execution of a frame plan. All geometry arrives precomputed in
//! CSS pixels; this module only issues context calls.

use site_core::helix::{DotCmd, LineCmd};
use site_core::FramePlan;
use std::f64::consts::TAU;
use web_sys as web;

use crate::constants::*;

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

pub fn draw(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan, dpr: f32) {
    // Backing store is CSS size * dpr; draw in CSS units on top.
    let _ = ctx.set_transform(dpr as f64, 0.0, 0.0, dpr as f64, 0.0, 0.0);
    let (w, h) = (plan.width as f64, plan.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    // Everything visual is clipped to the left region.
    ctx.save();
    ctx.begin_path();
    ctx.rect(0.0, 0.0, plan.split_x as f64, h);
    ctx.clip();

    draw_blobs(ctx, plan);
    draw_fireflies(ctx, plan);

    for line in &plan.helix.base_pairs {
        stroke_line(ctx, line, BASE_PAIR_RGB, 1.2);
    }
    for line in &plan.helix.strand_segments {
        stroke_line(ctx, line, STRAND_RGB, 1.6);
    }
    for dot in &plan.helix.dots {
        fill_dot(ctx, dot);
    }

    ctx.restore();

    // Safety clear of the right region against stray draws.
    if !plan.narrow {
        ctx.clear_rect(plan.split_x as f64, 0.0, w - plan.split_x as f64, h);
    }
}

fn draw_blobs(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan) {
    for blob in &plan.blobs {
        ctx.save();
        let _ = ctx.translate(blob.pos.x as f64, blob.pos.y as f64);
        let _ = ctx.rotate(blob.rot as f64);
        ctx.set_fill_style_str(&rgba(BLOB_RGB, blob.opacity));
        for atom in &blob.atoms {
            ctx.begin_path();
            let _ = ctx.arc(
                atom.offset.x as f64,
                atom.offset.y as f64,
                atom.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }
        ctx.restore();
    }
}

fn draw_fireflies(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan) {
    for firefly in &plan.fireflies {
        ctx.set_fill_style_str(&rgba(FIREFLY_RGB, firefly.alpha));
        ctx.begin_path();
        let _ = ctx.arc(
            firefly.pos.x as f64,
            firefly.pos.y as f64,
            firefly.radius as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }
}

fn stroke_line(
    ctx: &web::CanvasRenderingContext2d,
    line: &LineCmd,
    color: (u8, u8, u8),
    width: f64,
) {
    ctx.set_stroke_style_str(&rgba(color, line.alpha));
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(line.from.x as f64, line.from.y as f64);
    ctx.line_to(line.to.x as f64, line.to.y as f64);
    ctx.stroke();
}

fn fill_dot(ctx: &web::CanvasRenderingContext2d, dot: &DotCmd) {
    ctx.set_fill_style_str(&rgba(DOT_RGB, dot.alpha));
    ctx.begin_path();
    let _ = ctx.arc(dot.pos.x as f64, dot.pos.y as f64, dot.radius as f64, 0.0, TAU);
    ctx.fill();
}
