//! Windowed demo host for the balance meter.
//!
//! Owns the event loop, the framebuffer, and all animation scheduling; the
//! meter core only ever sees elapsed time and a drawing surface. Space
//! restarts the fill animation with a fresh random maximum, superseding the
//! run in flight.

use std::env;
use std::error::Error;
use std::fs;
use std::time::Instant;

use balance_meter::{BalanceMeter, Color, FrameSurface, MeterConfig};
use pixels::{Pixels, SurfaceTexture};
use rand::Rng;
use rusttype::Font;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const WINDOW_SIZE: u32 = 400;
const TARGET_FPS: f64 = 60.0;

const FONT_FALLBACKS: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

struct Args {
    max_balance: Option<f64>,
    currency_symbol: Option<String>,
    stroke_width: Option<f32>,
    title: String,
    font_path: Option<String>,
}

fn parse_args() -> Args {
    let mut parsed = Args {
        max_balance: None,
        currency_symbol: None,
        stroke_width: None,
        title: "Balance Meter".to_string(),
        font_path: None,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max" => parsed.max_balance = args.next().and_then(|v| v.parse().ok()),
            "--symbol" => parsed.currency_symbol = args.next(),
            "--stroke" => parsed.stroke_width = args.next().and_then(|v| v.parse().ok()),
            "--title" => {
                if let Some(title) = args.next() {
                    parsed.title = title;
                }
            }
            "--font" => parsed.font_path = args.next(),
            _ => {}
        }
    }
    parsed
}

fn load_font(path: Option<&str>) -> Result<Font<'static>, Box<dyn Error>> {
    if let Some(path) = path {
        let data = fs::read(path)?;
        return Font::try_from_vec(data).ok_or_else(|| format!("unsupported font: {path}").into());
    }
    for candidate in FONT_FALLBACKS {
        if let Ok(data) = fs::read(candidate) {
            if let Some(font) = Font::try_from_vec(data) {
                return Ok(font);
            }
        }
    }
    Err("no usable font found; pass one with --font <path>".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args();
    let font = load_font(args.font_path.as_deref())?;

    let config = MeterConfig::builder()
        .maybe_max_value(args.max_balance)
        .maybe_currency_symbol(args.currency_symbol)
        .maybe_stroke_width(args.stroke_width)
        .build();
    let mut meter = BalanceMeter::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&args.title)
        .with_inner_size(LogicalSize::new(f64::from(WINDOW_SIZE), f64::from(WINDOW_SIZE)))
        .with_resizable(false)
        .build(&event_loop)?;
    let window = std::sync::Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let mut fb_width = size.width;
    let mut fb_height = size.height;
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    let frame_duration = std::time::Duration::from_secs_f64(1.0 / TARGET_FPS);
    let mut last_frame = Instant::now();

    let mut run = meter.start_animation();
    let mut run_started = Instant::now();

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    fb_width = new_size.width;
                    fb_height = new_size.height;
                    let _ = pixels.resize_buffer(new_size.width, new_size.height);
                    let _ = pixels.resize_surface(new_size.width, new_size.height);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Space),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    let mut config = meter.model().config().clone();
                    config.max_value = rand::rng().random_range(500.0..5000.0);
                    if meter.configure(config).is_ok() {
                        run = meter.start_animation();
                        run_started = Instant::now();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let elapsed_ms = run_started.elapsed().as_secs_f64() * 1000.0;
                    meter.advance(run, elapsed_ms);

                    let mut surface =
                        FrameSurface::new(pixels.frame_mut(), fb_width, fb_height, &font);
                    surface.clear(Color::new(0xff, 0xff, 0xff));
                    meter.render(&mut surface);
                    let _ = pixels.render();
                }
                _ => {}
            },
            Event::AboutToWait => {
                if last_frame.elapsed() >= frame_duration {
                    window_clone.request_redraw();
                    last_frame = Instant::now();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
