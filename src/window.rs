//! Windowed driver: event loop, input wiring and frame scheduling.
//!
//! The app owns the scene and advances it on every `RedrawRequested`,
//! immediately requesting the next redraw, the native equivalent of a
//! self-rescheduling animation-frame callback. Pointer, scroll and resize
//! events update the [`Input`] tracker between frames; digits 1-3 select a
//! platform and Enter triggers the download stub.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::platform::{Platform, PlatformPanel};
use crate::scene::Backdrop;
use crate::time::Time;

/// Run the backdrop until the window is closed.
pub fn run(config: BackdropConfig) -> Result<(), BackdropError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    config: BackdropConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Option<Backdrop>,
    input: Input,
    time: Time,
    panel: PlatformPanel,
}

impl App {
    fn new(config: BackdropConfig) -> Self {
        let input = Input::new(config.viewport);
        Self {
            config,
            window: None,
            gpu: None,
            scene: None,
            input,
            time: Time::new(),
            panel: PlatformPanel::new(),
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        let selection = match code {
            KeyCode::Digit1 => Some(Platform::Windows),
            KeyCode::Digit2 => Some(Platform::Android),
            KeyCode::Digit3 => Some(Platform::MacOs),
            _ => None,
        };

        if let Some(platform) = selection {
            self.panel.select(platform);
            if let Some(window) = &self.window {
                window.set_title(&format!("ENZO - {}", self.panel.info().action));
            }
        } else if code == KeyCode::Enter {
            self.panel.begin_download();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("ENZO")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.viewport.x as f64,
                    self.config.viewport.y as f64,
                ));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let scene = Backdrop::new(self.config.clone());
            log::info!(
                "backdrop started: {} particles, {:?} viewport",
                scene.field().len(),
                self.config.viewport_class(),
            );

            match pollster::block_on(GpuState::new(window, &scene)) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    log::error!("{}", e);
                    event_loop.exit();
                    return;
                }
            }
            self.scene = Some(scene);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(&event);
            }
            WindowEvent::RedrawRequested => {
                let (_, dt) = self.time.update();
                let frame = self.input.frame_input();

                if let (Some(scene), Some(gpu)) = (&mut self.scene, &mut self.gpu) {
                    scene.tick(&frame, dt);

                    match gpu.render(scene, &frame) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
