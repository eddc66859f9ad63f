use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, LoopState, Scoped, StartCtx};
use crate::device::{DeviceError, GlInit, GlWindow};
use crate::gui::{dpi, GuiConfig, GuiLayer};
use crate::input::{Key, KeyInput, KeyState};
use crate::logging;
use crate::render::{aspect_ratio, RenderCtx};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub gl: GlInit,
    pub gui: GuiConfig,
    /// Color the framebuffer is cleared to before each frame.
    pub clear_color: [f32; 4],
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Triangle".to_string(),
            initial_size: LogicalSize::new(1920.0, 1080.0),
            gl: GlInit::default(),
            gui: GuiConfig::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Initializes the windowing system.
///
/// The runtime only talks to the platform through this seam, so startup can be
/// exercised without a display.
pub trait Platform {
    type Driver: EventLoopDriver;

    fn init(self) -> Result<Self::Driver, EventLoopError>;
}

/// Runs an initialized event loop to completion.
pub trait EventLoopDriver {
    fn drive(self, handler: &mut dyn ApplicationHandler) -> Result<(), EventLoopError>;
}

/// The native winit platform.
#[derive(Debug, Default, Copy, Clone)]
pub struct WinitPlatform;

impl Platform for WinitPlatform {
    type Driver = EventLoop<()>;

    fn init(self) -> Result<EventLoop<()>, EventLoopError> {
        EventLoop::new()
    }
}

impl EventLoopDriver for EventLoop<()> {
    fn drive(self, mut handler: &mut dyn ApplicationHandler) -> Result<(), EventLoopError> {
        EventLoop::run_app(self, &mut handler)
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A: App>(config: RuntimeConfig, app: A) -> Result<()> {
        Self::run_on(WinitPlatform, config, app)
    }

    /// Like [`Runtime::run`] on an explicit platform.
    ///
    /// If the platform fails to initialize, nothing else is created and the
    /// app is never started.
    pub fn run_on<P: Platform, A: App>(platform: P, config: RuntimeConfig, app: A) -> Result<()> {
        let driver = platform
            .init()
            .map_err(DeviceError::WindowingInit)
            .context("failed to create winit EventLoop")?;

        let mut state = AppState::new(config, app);
        let result = driver.drive(&mut state);
        state.teardown();

        if let Some(err) = state.startup_error.take() {
            return Err(err);
        }
        result.context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// Everything that exists while the window is open.
///
/// Field order is drop order: the GUI painter goes before the context.
struct Session {
    gui: Scoped<GuiLayer>,
    clock: FrameClock,
    dpi_scale: f32,
    gl_window: GlWindow,
}

struct AppState<A: App> {
    config: RuntimeConfig,
    app: A,

    session: Option<Session>,
    loop_state: LoopState,

    /// Set once `on_start` was called; `on_exit` is owed from then on.
    app_started: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A: App> AppState<A> {
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            session: None,
            loop_state: LoopState::default(),
            app_started: false,
            startup_error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(true);

        let gl_window = GlWindow::new(event_loop, attrs, &self.config.gl)
            .context("failed to create window with an OpenGL context")?;

        let dpi_scale = dpi::detect_scale(event_loop);
        let gui = GuiLayer::new(
            event_loop,
            gl_window.gl().clone(),
            gl_window.window(),
            &self.config.gui,
            dpi_scale,
        )
        .context("failed to initialize GUI")?;

        let session = self.session.insert(Session {
            gui: Scoped::new(gui),
            clock: FrameClock::new(),
            dpi_scale,
            gl_window,
        });

        self.app_started = true;
        let mut ctx = StartCtx {
            gl: session.gl_window.gl(),
        };
        self.app
            .on_start(&mut ctx)
            .context("application startup failed")?;

        // Elapsed time counts from the first frame, not from window creation.
        session.clock = FrameClock::new();
        session.gl_window.window().request_redraw();
        log::info!("render loop started");
        Ok(())
    }

    /// Releases app resources, the GUI, then the window and context.
    /// Safe to call more than once.
    fn teardown(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if std::mem::take(&mut self.app_started) {
            self.app.on_exit();
        }
        session.gui.shutdown();
        drop(session);
        log::info!("window closed");
    }

    fn redraw(&mut self) {
        if !self.loop_state.begin_frame() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(gui) = session.gui.get_mut() else {
            return;
        };

        let window = session.gl_window.window();
        let time = session.clock.tick();
        let render = RenderCtx::new(session.gl_window.gl(), session.gl_window.framebuffer_size());
        render.clear(self.config.clear_color);

        let fb = render.framebuffer;
        let mut frame = FrameCtx {
            render,
            time,
            aspect: aspect_ratio(fb.width, fb.height),
            dpi_scale: session.dpi_scale,
        };

        let app = &mut self.app;
        gui.run(window, |ctx| app.on_gui(ctx, &frame));

        // A minimized window has no drawable area: only the GUI frame runs.
        let mut control = AppControl::Continue;
        if frame.aspect.is_some() {
            frame.render.set_full_viewport();
            control = app.on_frame(&mut frame);
        }

        gui.paint(window);
        window.pre_present_notify();
        if let Err(e) = session.gl_window.swap_buffers() {
            logging::report_error("failed to swap buffers", &e);
        }

        if control == AppControl::Exit {
            self.loop_state.request_close();
        }
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.startup_error.is_some() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.startup_error = Some(e);
            self.teardown();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.loop_state.should_close() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; vsync paces the loop.
        if let Some(session) = &self.session {
            session.gl_window.window().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                self.loop_state.request_close();
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.loop_state.handle_key(&translate_key(key_event));
            }
            _ => {}
        }
        if self.loop_state.should_close() {
            event_loop.exit();
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(gui) = session.gui.get_mut() {
            let response = gui.on_window_event(session.gl_window.window(), &event);
            if response.repaint {
                session.gl_window.window().request_redraw();
            }
        }

        match event {
            WindowEvent::Resized(new_size) => {
                session.gl_window.resize(new_size);
                session.gl_window.window().request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gui) = session.gui.get() {
                    gui.rescale(scale_factor as f32);
                }
                let new_size = session.gl_window.window().inner_size();
                session.gl_window.resize(new_size);
                session.gl_window.window().request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

fn translate_key(event: &KeyEvent) -> KeyInput {
    KeyInput {
        key: map_key(event.physical_key),
        state: match event.state {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        },
        repeat: event.repeat,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use winit::keyboard::NativeKeyCode;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        started: Rc<Cell<u32>>,
        exited: Rc<Cell<u32>>,
    }

    impl App for Recorder {
        fn on_start(&mut self, _ctx: &mut StartCtx<'_>) -> Result<()> {
            self.started.set(self.started.get() + 1);
            Ok(())
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_>) -> AppControl {
            AppControl::Continue
        }

        fn on_exit(&mut self) {
            self.exited.set(self.exited.get() + 1);
        }
    }

    struct FailingPlatform;

    impl Platform for FailingPlatform {
        type Driver = IdleDriver;

        fn init(self) -> Result<IdleDriver, EventLoopError> {
            Err(EventLoopError::RecreationAttempt)
        }
    }

    /// Initializes fine, then returns `exit` without dispatching any event.
    struct IdlePlatform {
        exit: Result<(), EventLoopError>,
    }

    struct IdleDriver {
        exit: Result<(), EventLoopError>,
    }

    impl Platform for IdlePlatform {
        type Driver = IdleDriver;

        fn init(self) -> Result<IdleDriver, EventLoopError> {
            Ok(IdleDriver { exit: self.exit })
        }
    }

    impl EventLoopDriver for IdleDriver {
        fn drive(self, _handler: &mut dyn ApplicationHandler) -> Result<(), EventLoopError> {
            self.exit
        }
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn windowing_init_failure_is_fatal_and_skips_app() {
        let app = Recorder::default();
        let started = app.started.clone();
        let exited = app.exited.clone();

        let err = Runtime::run_on(FailingPlatform, RuntimeConfig::default(), app).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DeviceError>(),
            Some(DeviceError::WindowingInit(EventLoopError::RecreationAttempt))
        ));
        assert_eq!(started.get(), 0);
        assert_eq!(exited.get(), 0);
    }

    #[test]
    fn clean_loop_exit_is_success() {
        let platform = IdlePlatform { exit: Ok(()) };
        assert!(Runtime::run_on(platform, RuntimeConfig::default(), Recorder::default()).is_ok());
    }

    #[test]
    fn loop_error_is_propagated() {
        let platform = IdlePlatform { exit: Err(EventLoopError::ExitFailure(3)) };
        let err = Runtime::run_on(platform, RuntimeConfig::default(), Recorder::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EventLoopError>(),
            Some(EventLoopError::ExitFailure(3))
        ));
    }

    #[test]
    fn teardown_without_session_skips_on_exit() {
        let app = Recorder::default();
        let exited = app.exited.clone();
        let mut state = AppState::new(RuntimeConfig::default(), app);

        state.teardown();
        state.teardown();
        assert_eq!(exited.get(), 0);
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn default_window_matches_demo() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "OpenGL Triangle");
        assert_eq!(config.initial_size, LogicalSize::new(1920.0, 1080.0));
        assert_eq!(config.gl.version, (3, 3));
        assert!(config.gl.core_profile && config.gl.vsync);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn escape_maps() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn other_keys_are_unknown() {
        for code in [KeyCode::KeyA, KeyCode::Enter, KeyCode::Tab, KeyCode::Space] {
            assert!(matches!(map_key(PhysicalKey::Code(code)), Key::Unknown(_)));
        }
        assert_eq!(
            map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Unknown(0)
        );
    }
}
