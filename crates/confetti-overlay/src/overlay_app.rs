//! Overlay application implementing winit ApplicationHandler
//!
//! A transparent, always-on-top window. Clicks and key releases spawn
//! bursts; every redraw ticks the controller into a rectangle batch that the
//! wgpu pipeline draws over a cleared transparent frame.

use confetti_render::{RectBatch, RectPipeline, RenderContext, RenderError};
use confetti_runtime::{Controller, InputState, OverlayEvent, PRIMARY_BUTTON};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId, WindowLevel};

pub struct OverlayApp {
    pub controller: Controller,
    pub input: InputState,
    started: Instant,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<RectPipeline>,
    batch: RectBatch,

    // Window options
    pub fullscreen: bool,
    error: Option<RenderError>,
}

impl OverlayApp {
    pub fn new(controller: Controller, fullscreen: bool) -> Self {
        let (width, height) = controller.viewport();
        Self {
            controller,
            input: InputState::new(),
            started: Instant::now(),
            window: None,
            render_context: None,
            pipeline: None,
            batch: RectBatch::new(width, height),
            fullscreen,
            error: None,
        }
    }

    /// Error that closed the event loop early, if any
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let window_attrs = Window::default_attributes()
            .with_title("Confetti")
            .with_inner_size(PhysicalSize::new(1280, 720))
            .with_transparent(true)
            .with_decorations(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_maximized(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RenderError::WindowCreation(e.to_string()))?,
        );

        if self.fullscreen {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        let render_context = pollster::block_on(RenderContext::new(window.clone()))?;
        let pipeline = RectPipeline::new(&render_context.device, render_context.format());

        let size = render_context.size;
        self.set_scale_factor(window.scale_factor());
        self.resize_viewport(size);

        self.render_context = Some(render_context);
        self.pipeline = Some(pipeline);
        Ok(())
    }

    fn resize_viewport(&mut self, size: PhysicalSize<u32>) {
        // Minimized
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.batch.resize(size.width, size.height);
        self.input.set_viewport(size.width, size.height);
        self.controller.push_event(OverlayEvent::Resized {
            width: size.width,
            height: size.height,
        });
    }

    fn set_scale_factor(&mut self, scale_factor: f64) {
        self.input.set_scale_factor(scale_factor);
        self.controller
            .push_event(OverlayEvent::ScaleFactorChanged(scale_factor));
    }

    fn toggle_fullscreen(&mut self) {
        if let Some(window) = &self.window {
            if window.fullscreen().is_some() {
                window.set_fullscreen(None);
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }
    }

    fn render(&mut self) {
        let timestamp_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.controller.tick(timestamp_ms, Some(&mut self.batch));

        let Some(context) = &self.render_context else {
            return;
        };
        let Some(pipeline) = &mut self.pipeline else {
            return;
        };

        pipeline.prepare(&context.device, &context.queue, &self.batch);

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pipeline.draw(&mut pass);
        }

        context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            tracing::error!("Failed to start overlay: {}", e);
            self.error = Some(e);
            event_loop.exit();
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
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
                self.resize_viewport(new_size);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(scale_factor);
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.input.set_viewport(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_mouse_move(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.process_mouse_left();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => match key_code {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::F11 => {
                                if !event.repeat {
                                    self.toggle_fullscreen();
                                }
                            }
                            _ => {}
                        },
                        ElementState::Released => {
                            if matches!(key_code, KeyCode::Escape | KeyCode::F11) {
                                return;
                            }
                            let trigger = self.input.process_key_up(key_code);
                            self.controller.push_event(OverlayEvent::Trigger(trigger));
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let btn = match button {
                    MouseButton::Left => PRIMARY_BUTTON,
                    MouseButton::Right => 1,
                    MouseButton::Middle => 2,
                    _ => return,
                };

                match state {
                    ElementState::Pressed => self.input.process_mouse_button_down(btn),
                    ElementState::Released => {
                        if let Some(trigger) = self.input.process_mouse_button_up(btn) {
                            self.controller.push_event(OverlayEvent::Trigger(trigger));
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
