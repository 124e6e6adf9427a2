use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::input::{config, resolver, InputEvent};
use engine::renderer::{Renderer, WORLD_HEIGHT, WORLD_WIDTH};
use game::Player;

/// Controls file looked up in the working directory
const CONTROLS_PATH: &str = "config.json";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Keybound...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Keybound")
            .with_inner_size(winit::dpi::LogicalSize::new(WORLD_WIDTH, WORLD_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let keymap = config::load(CONTROLS_PATH);
    let mut player = Player::new(glam::Vec2::new(200.0, 150.0));
    let mut pending: VecDeque<InputEvent> = VecDeque::new();

    // Main event loop: window events queue up as input events, and each
    // redraw drains the queue through the resolver before rendering.
    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        pending.push_back(InputEvent::Quit);
                    }
                    WindowEvent::Resized(physical_size) => {
                        renderer.resize(physical_size);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        pending.push_back(InputEvent::from_key_event(&event));
                    }
                    WindowEvent::RedrawRequested => {
                        if !resolver::resolve_frame(&keymap, &mut player, pending.drain(..)) {
                            info!("Termination requested, shutting down...");
                            elwt.exit();
                            return;
                        }

                        if let Err(e) = renderer.render(&player) {
                            error!("Render failed: {}", e);
                            elwt.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    // Request redraw on next frame
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
