//! CPU rasterization of recorded draw commands.
//!
//! Fills a `0x00RRGGBB` pixel buffer, the format the softbuffer surface
//! presents. Commands arrive pre-clipped in screen space; the rasterizer
//! still clamps every rectangle to the buffer.

use crate::renderer::{Color, DrawCommand};

/// Rasterize `commands` into `frame`, a row-major `width * height` buffer.
pub fn rasterize(commands: &[DrawCommand], width: u32, height: u32, clear: Color, frame: &mut [u32]) {
    let pixels = (width as usize) * (height as usize);
    debug_assert!(frame.len() >= pixels, "frame buffer smaller than {width}x{height}");
    if frame.len() < pixels {
        return;
    }

    frame[..pixels].fill(pack(clear));

    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                let x0 = (rect.x.round().max(0.0) as u32).min(width);
                let y0 = (rect.y.round().max(0.0) as u32).min(height);
                let x1 = ((rect.x + rect.width).round().max(0.0) as u32).min(width);
                let y1 = ((rect.y + rect.height).round().max(0.0) as u32).min(height);

                if color.a >= 1.0 {
                    let pixel = pack(*color);
                    for y in y0..y1 {
                        let row = (y * width) as usize;
                        frame[row + x0 as usize..row + x1 as usize].fill(pixel);
                    }
                } else if color.a > 0.0 {
                    for y in y0..y1 {
                        let row = (y * width) as usize;
                        for px in &mut frame[row + x0 as usize..row + x1 as usize] {
                            *px = blend(*color, *px);
                        }
                    }
                }
            }
        }
    }
}

fn pack(color: Color) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(color.r) << 16) | (channel(color.g) << 8) | channel(color.b)
}

/// Source-over blend of `src` onto an opaque packed destination pixel.
fn blend(src: Color, dst: u32) -> u32 {
    let a = src.a.clamp(0.0, 1.0);
    let mix = |s: f32, d: u32| {
        let d = d as f32 / 255.0;
        (((s.clamp(0.0, 1.0) * a + d * (1.0 - a)) * 255.0).round() as u32).min(255)
    };
    (mix(src.r, (dst >> 16) & 0xff) << 16) | (mix(src.g, (dst >> 8) & 0xff) << 8) | mix(src.b, dst & 0xff)
}
