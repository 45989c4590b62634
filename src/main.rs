//! Space Drift entry point
//!
//! Loads settings, assets and the save store, then runs the game loop on a
//! winit event loop. One redraw is one simulation frame.

use std::error::Error;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use space_drift::persistence::SaveStore;
use space_drift::platform::{FrameClock, InputState};
use space_drift::renderer::{RenderError, RenderState, scene_vertices, window_title};
use space_drift::sim::{SessionConfig, SessionState, TickOutcome, tick};
use space_drift::{AssetRegistry, Settings};

struct App {
    settings: Settings,
    assets: AssetRegistry,
    store: Box<dyn SaveStore>,
    state: SessionState,
    input: InputState,
    clock: FrameClock,
    render_state: Option<RenderState>,
    title: String,
    /// Startup failure reported once the event loop returns
    init_error: Option<RenderError>,
}

impl App {
    fn new(
        settings: Settings,
        assets: AssetRegistry,
        store: Box<dyn SaveStore>,
        state: SessionState,
    ) -> Self {
        Self {
            settings,
            assets,
            store,
            state,
            input: InputState::new(),
            clock: FrameClock::new(),
            render_state: None,
            title: String::new(),
            init_error: None,
        }
    }

    fn view(&self) -> Vec2 {
        Vec2::new(
            self.settings.window_width as f32,
            self.settings.window_height as f32,
        )
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<RenderState, RenderError> {
        let attributes = Window::default_attributes()
            .with_title("Space Drift")
            .with_inner_size(LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let view = self.view();
        RenderState::new(window, (view.x, view.y))
    }

    /// Run one simulation frame; false once the session asked to exit
    fn step(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let dt = self.clock.tick();
        let frame = self.input.take_frame();
        match tick(&mut self.state, &frame, dt, self.store.as_mut()) {
            TickOutcome::Running => true,
            TickOutcome::Exit => {
                log::info!("Exiting with score {}", self.state.score);
                event_loop.exit();
                false
            }
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let snapshot = self.state.snapshot();
        let vertices = scene_vertices(&snapshot, &self.assets, self.view());

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let title = window_title(&snapshot);
        if title != self.title {
            render_state.window.set_title(&title);
            self.title = title;
        }

        match render_state.render(&vertices, snapshot.background.color()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, shutting down");
                self.input.request_close();
                self.step(event_loop);
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_state.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(render_state) => {
                log::info!("Graphics initialized");
                self.render_state = Some(render_state);
            }
            Err(e) => {
                log::error!("Failed to initialize graphics: {}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.input.request_close();
                self.step(event_loop);
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.input.handle_key_event(&event),
            WindowEvent::RedrawRequested => {
                if self.step(event_loop) {
                    self.render(event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(render_state) = &self.render_state {
            render_state.window.request_redraw();
        }
    }
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load_default();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    log::info!("Space Drift starting");

    let assets = match &settings.asset_manifest {
        Some(path) => AssetRegistry::load(path)?,
        None => AssetRegistry::builtin(),
    };

    let mut store = settings.save_store();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Session seed: {}", seed);

    let config = SessionConfig::new(&settings, &assets);
    let state = SessionState::start(config, seed, store.as_mut());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, assets, store, state);
    event_loop.run_app(&mut app)?;

    // No-op unless a write failed earlier or the loop ended on its own
    if let Err(e) = app.store.flush() {
        log::warn!("Final save flush failed: {}", e);
    }

    match app.init_error.take() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
