use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, FrameDriver, UpdateCtx};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::{InputEvent, InputState, platform};
use crate::render::RenderFrame;

/// Window configuration: the shell's title, size, and window options.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl RuntimeConfig {
    pub fn new(title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            initial_size: LogicalSize::new(width, height),
            resizable: true,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new("kiln", 800.0, 600.0)
    }
}

/// Entry point for the shell.
pub struct Runtime;

impl Runtime {
    /// Opens the window, acquires the GPU surface, and runs the frame loop
    /// until a quit event is observed.
    ///
    /// An initialization failure (window or surface creation) is the only
    /// error this returns; the loop itself has no failure path short of a
    /// lost GPU. Resources are released by drop on every exit path.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = ShellState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct ShellEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct ShellState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    driver: FrameDriver,
    input: InputState,
    /// Events buffered since the last frame, drained FIFO by the next one.
    pending: Vec<InputEvent>,

    entry: Option<ShellEntry>,
    init_error: Option<anyhow::Error>,
}

impl<A> ShellState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            driver: FrameDriver::new(),
            input: InputState::default(),
            pending: Vec::new(),
            entry: None,
            init_error: None,
        }
    }

    fn create_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = ShellEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU surface")?;

        self.entry = Some(entry);
        Ok(())
    }

    /// Runs one full frame: clock, event drain, update, render, present.
    ///
    /// Returns false when the frame observed a quit or a fatal surface loss
    /// and the loop should exit.
    fn run_frame(&mut self) -> bool {
        let Self {
            app,
            driver,
            input,
            pending,
            entry,
            ..
        } = self;

        let Some(entry) = entry.as_mut() else {
            return false;
        };

        // Phase 1: frame timing.
        let time = driver.begin_frame();

        // Phase 2: drain this frame's events, FIFO. A quit in the batch
        // stops the driver but the frame still finishes its phases.
        let events: Vec<InputEvent> = pending.drain(..).collect();
        driver.dispatch(app, input, events);

        // Phase 3: update.
        app.update(&mut UpdateCtx { time, input });

        // Phases 4 + 5: render into the acquired frame, then present.
        let mut fatal = false;
        entry.with_gpu_mut(|gpu| {
            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    match gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Fatal => {
                            log::error!("surface lost irrecoverably");
                            fatal = true;
                        }
                        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {}
                    }
                    return;
                }
            };

            app.render(&mut RenderFrame::new(&mut frame.encoder, &frame.view));
            gpu.submit(frame);
        });

        driver.is_running() && !fatal
    }
}

impl<A> ApplicationHandler for ShellState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.create_entry(event_loop) {
            self.init_error = Some(err);
            event_loop.exit();
            return;
        }

        self.driver.start();
        log::info!(
            "shell running: \"{}\" {}x{}",
            self.config.title,
            self.config.initial_size.width,
            self.config.initial_size.height,
        );

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.driver.is_running() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; vsync inside present paces the loop.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.pending.push(InputEvent::Quit);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.pending.push(InputEvent::Key {
                    key: platform::winit::map_physical_key(event.physical_key),
                    state: platform::winit::map_key_state(event.state),
                });
            }

            WindowEvent::Focused(focused) => {
                self.pending.push(InputEvent::Focused(focused));
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.run_frame() {
                    // Dropping the entry releases surface before window.
                    self.entry = None;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
