//! Kestrel demo: a winit window driving an input context and a menu.
//!
//! Arrow keys move the menu focus, Enter or E activates, the mouse hovers and
//! clicks. Escape quits. Activity is reported through the log; run with
//! `RUST_LOG=debug` to see it, and set `KESTREL_TRACE_INPUT` to trace every
//! synthesized event. An optional font path argument enables
//! measured text wrapping of the help line.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use kestrel_engine::input::platform::WinitDeviceSource;
use kestrel_engine::input::{EventCategory, InputConfig, InputContext, InputQuery, Key, TransitionKind};
use kestrel_engine::logging::{init_logging, LoggingConfig};
use kestrel_engine::text::{wrap_text, FontSystem};
use kestrel_engine::time::FrameClock;
use kestrel_ui::prelude::*;

const HELP: &str = "Use the arrow keys to move between entries, Enter to activate, Escape to quit.";

/// Window configuration for the demo.
#[derive(Debug, Clone)]
struct DemoConfig {
    title: String,
    initial_size: LogicalSize<f64>,
    help_width: f32,
    trace_input: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "kestrel".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            help_width: 320.0,
            trace_input: std::env::var_os("KESTREL_TRACE_INPUT").is_some(),
        }
    }
}

struct Demo {
    config: DemoConfig,
    window: Option<Window>,
    input: InputContext<WinitDeviceSource>,
    clock: FrameClock,
    menu: Rc<RefCell<Menu>>,
    exit_requested: Rc<Cell<bool>>,
}

impl Demo {
    fn new(config: DemoConfig) -> Self {
        let input_config = InputConfig { trace_events: config.trace_input, ..Default::default() };
        let mut input = InputContext::new(WinitDeviceSource::new(), input_config);

        let exit_requested = Rc::new(Cell::new(false));
        let menu = Rc::new(RefCell::new(build_menu(Rc::clone(&exit_requested))));
        Menu::attach(&menu, &mut input);

        let exit = Rc::clone(&exit_requested);
        input.subscribe(EventCategory::KeyPressed, move |event| {
            if event.is_key(Key::Escape, TransitionKind::Pressed) {
                exit.set(true);
            }
            Ok(())
        });

        Self {
            config,
            window: None,
            input,
            clock: FrameClock::default(),
            menu,
            exit_requested,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop.create_window(attrs).context("failed to create window")?;
        self.window = Some(window);
        Ok(())
    }

    fn frame(&mut self) {
        let time = self.clock.tick();
        let frame = self.input.tick();

        if !frame.dispatch.is_clean() {
            log::warn!("tick {}: {} listener failure(s)", frame.index, frame.dispatch.failures);
        }
        if let Some(moved) = frame.moved() {
            log::trace!("cursor moved by {:?}", moved.delta());
        }

        let menu = &mut *self.menu.borrow_mut();
        menu.update(time.dt);

        if self.input.is_any_key_down(&[Key::ShiftLeft, Key::ShiftRight]) && self.input.is_key_pressed(Key::F1) {
            for entry in menu.entries() {
                log::info!("{} ({:?})", entry.display_text(), entry.item().text_colour());
            }
        }
    }

    fn exit_requested(&self) -> bool {
        self.exit_requested.get()
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(focused) = self.input.source_mut().handle_window_event(&event) {
            self.input.focus_changed(focused);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                if self.exit_requested() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn build_menu(exit_requested: Rc<Cell<bool>>) -> Menu {
    let row = |i: i32| Rect::new(384, 240 + i * 48, 512, 48);

    Menu::new()
        .with_entry(
            MenuItem::new("New game")
                .bounds(row(0))
                .on_activated(|| log::info!("new game")),
        )
        .with_entry(
            MenuToggle::new("Music")
                .bounds(row(1))
                .toggle_state(true)
                .on_change(|on| log::info!("music {}", if on { "on" } else { "off" })),
        )
        .with_entry(
            MenuToggle::new("Fullscreen")
                .bounds(row(2))
                .on_change(|on| log::info!("fullscreen {}", if on { "on" } else { "off" })),
        )
        .with_entry(
            MenuItem::new("Quit")
                .bounds(row(3))
                .foreground(Color::rgba(0.8, 0.8, 0.8, 1.0))
                .on_activated(move || exit_requested.set(true)),
        )
}

fn log_help(config: &DemoConfig) -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        let wrapped = wrap_text(|s: &str| s.chars().count() as f32 * 8.0, HELP, config.help_width);
        log::info!("{wrapped}");
        return Ok(());
    };

    let bytes = std::fs::read(&path).with_context(|| format!("failed to read font {path}"))?;
    let mut fonts = FontSystem::new();
    let font = fonts.load_font(&bytes).context("failed to parse font")?;
    log::info!("{}", fonts.wrap(HELP, font, 16.0, config.help_width));
    Ok(())
}

fn main() -> Result<()> {
    let config = DemoConfig::default();
    init_logging(LoggingConfig { trace_input: config.trace_input, ..Default::default() });

    log_help(&config)?;

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut demo = Demo::new(config);

    event_loop
        .run_app(&mut demo)
        .context("winit event loop terminated with error")?;

    let source = demo.input.shutdown();
    log::debug!("input shut down (focused={})", source.is_focused());
    Ok(())
}
