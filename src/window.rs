//! Window and GL context lifecycle.
use std::sync::atomic::{AtomicBool, Ordering};

use sdl2::{video, EventPump};

use crate::{error::DemoError, gl_wrappers::gl_upd_viewport, DemoConfig};

const OPENGL_MAJOR_VER: u8 = 3;
const OPENGL_MINOR_VER: u8 = 3;

/// Set while a [`WindowContext`] is alive.
static WINDOW_SLOT_TAKEN: AtomicBool = AtomicBool::new(false);

fn acquire_window_slot() -> bool {
    WINDOW_SLOT_TAKEN
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

fn release_window_slot() {
    WINDOW_SLOT_TAKEN.store(false, Ordering::Release);
}

/// Owns the window, its GL context and the SDL globals backing them.
///
/// At most one of these exists at a time; [`WindowContext::create`]
/// fails while another one is alive. Dropping it tears everything down
/// and frees the slot again.
pub struct WindowContext {
    // Declaration order matters: the GL context must go before the
    // window it belongs to.
    gl_ctx: video::GLContext,
    window: video::Window,
    event_pump: EventPump,
    video_ctx: sdl2::VideoSubsystem,
    sdl_ctx: sdl2::Sdl,
    main_id: u32,
}

impl WindowContext {
    /// Initialize SDL and create the window with a current GL context.
    ///
    /// Requests a core, forward-compatible GL 3.3 context, loads the GL
    /// function pointers and sets the initial viewport.
    ///
    /// # Errors
    /// Any failure along the way (SDL init, window build, context
    /// creation) comes back as [`DemoError::WindowCreation`], including
    /// an attempt to create a second context while one is alive.
    pub fn create(config: &DemoConfig) -> Result<Self, DemoError> {
        if !acquire_window_slot() {
            return Err(DemoError::WindowCreation(String::from(
                "a window/GL context already exists in this process",
            )));
        }
        Self::create_inner(config).inspect_err(|_| release_window_slot())
    }

    fn create_inner(config: &DemoConfig) -> Result<Self, DemoError> {
        let sdl_ctx = sdl2::init().map_err(DemoError::WindowCreation)?;
        let video_ctx = sdl_ctx.video().map_err(DemoError::WindowCreation)?;
        video_ctx
            .gl_load_library_default()
            .map_err(DemoError::WindowCreation)?;

        video_ctx
            .gl_attr()
            .set_context_flags()
            .forward_compatible()
            .set();
        video_ctx
            .gl_attr()
            .set_context_major_version(OPENGL_MAJOR_VER);
        video_ctx
            .gl_attr()
            .set_context_minor_version(OPENGL_MINOR_VER);
        video_ctx
            .gl_attr()
            .set_context_profile(video::GLProfile::Core);

        let window = video_ctx
            .window(&config.title, config.width, config.height)
            .position_centered()
            .resizable()
            .opengl()
            .build()
            .map_err(|err| DemoError::WindowCreation(err.to_string()))?;
        let main_id = window.id();

        // Creating the context also makes it current.
        let gl_ctx = window
            .gl_create_context()
            .map_err(DemoError::WindowCreation)?;
        gl::load_with(|s| video_ctx.gl_get_proc_address(s).cast());

        let event_pump = sdl_ctx.event_pump().map_err(DemoError::WindowCreation)?;

        gl_upd_viewport(config.width, config.height);

        log::info!(
            "created {}x{} window \"{}\" (GL {}.{} core)",
            config.width,
            config.height,
            config.title,
            OPENGL_MAJOR_VER,
            OPENGL_MINOR_VER
        );

        Ok(Self {
            gl_ctx,
            window,
            event_pump,
            video_ctx,
            sdl_ctx,
            main_id,
        })
    }

    /// The GL context belonging to this window. Current since creation.
    pub fn gl_ctx(&self) -> &video::GLContext {
        &self.gl_ctx
    }

    /// SDL id of the window, for filtering window events.
    pub fn main_window_id(&self) -> u32 {
        self.main_id
    }

    /// The event pump for this window's SDL context.
    pub fn event_pump(&mut self) -> &mut EventPump {
        &mut self.event_pump
    }

    /// Present the back buffer.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}

impl Drop for WindowContext {
    fn drop(&mut self) {
        log::debug!("destroying window and GL context");
        release_window_slot();
    }
}

#[cfg(test)]
mod tests {
    use super::{acquire_window_slot, release_window_slot};

    // One test only: the slot is process-wide state and the test
    // harness runs tests in parallel.
    #[test]
    fn window_slot_is_exclusive_and_release_is_idempotent() {
        // Releasing with nothing acquired must not do any harm.
        release_window_slot();
        release_window_slot();

        assert!(acquire_window_slot());
        // Second acquire while taken must fail, repeatedly.
        assert!(!acquire_window_slot());
        assert!(!acquire_window_slot());

        release_window_slot();
        assert!(acquire_window_slot());
        release_window_slot();
    }
}
