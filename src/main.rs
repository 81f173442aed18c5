use anyhow::Result;
use log::info;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Control, KeyboardController};
use game::{Game, GameConfig, TickReport};

const TITLE: &str = "Side Scroller";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Side Scroller...");

    let config = GameConfig::default();
    let mut game = Game::with_placeholder_frames(&config)?;
    let mut controller = KeyboardController::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.viewport.width as u32,
            config.viewport.height as u32,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                if controller.handle_key(key, pressed) == Some(Control::Pause) {
                    game.toggle_pause();
                    if game.is_paused() {
                        window.set_title(&format!("{TITLE} (paused)"));
                    } else {
                        window.set_title(TITLE);
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                controller.release_all();
                game_loop.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for _ in 0..game_loop.begin_frame() {
                    game.queue_intent(controller.poll());
                    if let Some(report) = game.tick() {
                        log_events(&report);
                    }
                }

                // Drawing belongs to the platform layer; hand it the snapshot
                let snapshot = game.snapshot();
                log::trace!(
                    "Frame {} ({:.0} fps, {} of {} ticks simulated): {} actor {:?} \
                     showing {} {:?}, {} obstacle(s), backdrop {:?}, scrolled {}",
                    game_loop.frame_count(),
                    game_loop.fps(),
                    game.tick_count(),
                    game_loop.tick_count(),
                    game.actor().state().name(),
                    snapshot.actor,
                    snapshot.frame.name,
                    snapshot.frame.size(),
                    snapshot.obstacles.len(),
                    snapshot.backdrop,
                    game.camera().world_offset()
                );
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Log the per-tick events a sound or effects layer would react to
fn log_events(report: &TickReport) {
    let contacts = report.contacts;
    if contacts.landed {
        log::trace!("Landed");
    }
    if contacts.head_bump {
        log::trace!("Head bump");
    }
    if contacts.blocked_left || contacts.blocked_right {
        log::trace!("Blocked");
    }
    if report.scroll.clamped_left {
        log::trace!("Held at the left edge");
    } else if report.scroll.shift > 0 {
        log::trace!("Scrolled {}", report.scroll.shift);
    }
}
