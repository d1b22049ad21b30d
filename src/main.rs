//! Draws a single triangle in a window until the window is closed.
#![allow(dead_code)]
use std::{process::ExitCode, thread, time::Duration};

use sdl2::event::{Event, WindowEvent};

mod error;
mod gl_wrappers;
mod render;
mod window;

use error::DemoError;
use gl_wrappers::gl_upd_viewport;
use render::Render;
use window::WindowContext;

const START_WIDTH: u32 = 800;
const START_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "GLFW window";

/// How long to sleep after each frame. This is plain fixed pacing,
/// the sleep does not shrink when a frame took long to draw.
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Startup parameters for the demo.
///
/// The binary itself takes no arguments and always runs with
/// [`DemoConfig::default`]; the struct exists so window size and frame
/// pacing are parameters rather than constants buried in the loop.
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub frame_interval: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: START_WIDTH,
            height: START_HEIGHT,
            title: WINDOW_TITLE.into(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&DemoConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Window up, render set up, then loop until a close is requested.
///
/// The close flag is checked at the top of every iteration, so no
/// frame is drawn after a close request has been observed.
fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let mut ctx = WindowContext::create(config)?;
    let mut render_ctx = Render::init(ctx.gl_ctx())?;

    let main_id = ctx.main_window_id();
    'going: loop {
        for event in ctx.event_pump().poll_iter() {
            match event {
                Event::Quit { .. } => {
                    break 'going;
                }
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } if window_id == main_id => {
                    gl_upd_viewport(width.try_into().unwrap(), height.try_into().unwrap());
                }
                _ => {}
            }
        }

        render_ctx.clear();
        render_ctx.draw();

        thread::sleep(config.frame_interval);
        ctx.swap();
    }

    log::info!("close requested, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::DemoConfig;

    #[test]
    fn default_config_values() {
        let config = DemoConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.title, "GLFW window");
        assert_eq!(config.frame_interval, Duration::from_millis(100));
    }
}
