mod batch;
mod commands;
mod gpu;
mod pointer;
mod settings;
mod system_cursor;

use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use tentacle_core::{Engine, Flow};
use winit::{
    event::*,
    event_loop::{ControlFlow, DeviceEvents, EventLoop},
    keyboard::PhysicalKey,
    window::{WindowBuilder, WindowLevel},
};

use batch::ShapeBatch;
use gpu::GpuState;
use pointer::PointerSource;
use settings::Settings;
use system_cursor::SystemCursor;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::from_env();
    let seed = settings.seed.unwrap_or_else(rand::random);

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.listen_device_events(DeviceEvents::Always);

    let builder = WindowBuilder::new()
        .with_title("Tentacles")
        .with_transparent(true)
        .with_decorations(false)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_maximized(true);
    #[cfg(target_os = "windows")]
    let builder = {
        use winit::platform::windows::WindowBuilderExtWindows;
        builder.with_skip_taskbar(true)
    };
    let window = builder
        .build(&event_loop)
        .context("creating overlay window")?;
    if let Err(e) = window.set_cursor_hittest(false) {
        log::warn!("[window] click-through unavailable: {}", e);
    }

    let origin = window
        .inner_position()
        .map(|p| Vec2::new(p.x as f32, p.y as f32))
        .unwrap_or(Vec2::ZERO);
    let size = window.inner_size();
    let center = origin + Vec2::new(size.width as f32, size.height as f32) * 0.5;
    let mut system = SystemCursor::open();
    let mut pointer = PointerSource::new(center);
    pointer.set_window_origin(origin);
    if let Some(monitor) = window.current_monitor() {
        let pos = monitor.position();
        let extent = monitor.size();
        let min = Vec2::new(pos.x as f32, pos.y as f32);
        pointer.set_bounds(
            min,
            min + Vec2::new(extent.width as f32, extent.height as f32),
        );
    }

    let start = pointer.sample(system.as_mut().and_then(SystemCursor::position));

    log::info!(
        "[engine] profile={} wobble={} gravity={} style={} seed={:#x}",
        settings.profile,
        settings.config.wobble,
        settings.config.gravity,
        settings.config.style,
        seed
    );
    let mut engine = Engine::new(settings.config, settings.profile, start, seed);
    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut batch = ShapeBatch::with_capacity(batch_capacity(&engine));
    let mut last = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::Moved(pos),
            ..
        } => pointer.set_window_origin(Vec2::new(pos.x as f32, pos.y as f32)),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => pointer.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32)),
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } => pointer.on_device_motion(Vec2::new(delta.0 as f32, delta.1 as f32)),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if let Some(command) = commands::command_for_key(code) {
                log::debug!("[keys] {:?} -> {:?}", code, command);
                if engine.apply(command) == Flow::Exit {
                    elwt.exit();
                }
            }
        }
        Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } => {
            batch.clear();
            engine.paint(&mut batch);
            match state.render(&batch, pointer.window_origin()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] {:?}", e),
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let cursor = pointer.sample(system.as_mut().and_then(SystemCursor::position));
            if engine.advance(now - last, cursor) {
                state.window.request_redraw();
            }
            last = now;
            elwt.set_control_flow(ControlFlow::WaitUntil(now + engine.until_next_tick()));
        }
        _ => {}
    })?;
    Ok(())
}

// Room for every segment quad plus one tip fan per chain.
fn batch_capacity(engine: &Engine) -> usize {
    let config = engine.simulation().config();
    let segments = config.points_per_appendage.saturating_sub(1);
    config.appendage_count * (segments * 6 + batch::CIRCLE_SEGMENTS * 3)
}
