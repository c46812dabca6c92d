//! Core application state and lifecycle.

use ovalpad_core::collection::ShapeCollection;
use ovalpad_core::controller::{EventResponse, KeyCommand};
use ovalpad_core::input::RawPointerEvent;
use ovalpad_core::mode::ModeCommand;
use ovalpad_core::shapes::{OUTLINE_COLOR, Shape};
use ovalpad_render::{
    DEFAULT_BACKGROUND, RenderContext, RenderResult, Renderer, RendererError, VelloRenderer,
};
use peniko::Color;
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::event_handler::{EventHandler, map_button, to_dip, wheel_units};
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use crate::ui::{UiAction, UiState, render_ui};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface creation failed: {0}")]
    Surface(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub outline_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Drawing Ellipse".to_string(),
            width: 1280,
            height: 800,
            background_color: DEFAULT_BACKGROUND.into(),
            outline_color: OUTLINE_COLOR.into(),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    /// Physical pixels per device-independent unit.
    scale_factor: f64,

    // Rendering
    vello_renderer: vello::Renderer,
    shape_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // State
    shapes: ShapeCollection<Shape>,
    event_handler: EventHandler,
    config: AppConfig,
}

impl AppState {
    fn ui_state(&self) -> UiState {
        UiState {
            mode: self.event_handler.mode(),
            shape_count: self.shapes.len(),
            pointer_busy: self.event_handler.is_busy(),
        }
    }

    fn handle_pointer(&mut self, event: RawPointerEvent) {
        let response = self.event_handler.handle_pointer(&mut self.shapes, event);
        self.apply_response(response);
    }

    fn apply_command(&mut self, command: ModeCommand) {
        if self.event_handler.apply_command(command) {
            log::info!("{} mode", self.event_handler.mode().name());
            self.window.request_redraw();
        }
    }

    fn apply_key(&mut self, key: KeyCommand) {
        let response = self.event_handler.key(key);
        self.apply_response(response);
    }

    fn apply_response(&self, response: EventResponse) {
        if response.redraw {
            self.window.request_redraw();
        }
    }

    /// Build the frame and present it.
    fn render(&mut self, render_cx: &vello::util::RenderContext) -> RenderResult<()> {
        // Run egui
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let ui_state = self.ui_state();
        let mut ui_action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            ui_action = render_ui(ctx, &ui_state);
        });
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        if let Some(UiAction::SetMode(command)) = ui_action {
            self.apply_command(command);
        }

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let ctx = RenderContext::new(&self.shapes)
            .with_scale_factor(self.scale_factor)
            .with_background(self.config.background_color)
            .with_outline(self.config.outline_color);
        self.shape_renderer.build_scene(&ctx);
        let base_color = self.shape_renderer.background_color(&ctx);
        let scene = self.shape_renderer.take_scene();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-bindable Rgba8Unorm target; the surface may be Bgra8Unorm.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter.copy(
                device,
                &mut blit_encoder,
                &render_texture_view,
                &surface_view,
            );
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu requires a 'static render pass.
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();
        Ok(())
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error hit inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(e.to_string()))?;

        self.finish_init(window, surface)
    }

    /// Finish initialization after surface is created.
    fn finish_init(
        &mut self,
        window: Arc<Window>,
        surface: RenderSurface<'static>,
    ) -> Result<(), AppError> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| AppError::Surface("render context not initialized".to_string()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let scale_factor = window.scale_factor();
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "Ovalpad initialized - {}x{} at scale {}",
            surface.config.width,
            surface.config.height,
            scale_factor
        );
        log::info!("Keyboard shortcuts: D=Draw, S=Select, Space=Toggle, F1=Help");

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            scale_factor,
            vello_renderer,
            shape_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            shapes: ShapeCollection::new(),
            event_handler: EventHandler::new(),
            config: self.config.clone(),
        });

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("Initialization failed: {}", e);
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
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        // A gesture in progress keeps the pointer even over egui areas.
        let egui_wants_pointer = !state.event_handler.is_busy()
            && (egui_response.consumed
                || state.egui_ctx.is_pointer_over_area()
                || state.egui_ctx.wants_pointer_input());
        let egui_wants_keyboard = state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("Scale factor changed to {}", scale_factor);
                state.scale_factor = scale_factor;
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                match state.render(render_cx) {
                    Ok(()) => {}
                    Err(RendererError::Surface(e)) => {
                        log::warn!("Failed to get surface texture: {}", e);
                        state.window.request_redraw();
                    }
                    Err(e) => log::error!("Failed to render: {}", e),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if egui_wants_pointer {
                    return;
                }
                let position = to_dip(position, state.scale_factor);
                state.handle_pointer(RawPointerEvent::Move { position });
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = map_button(button) else {
                    return;
                };
                let position = state.event_handler.pointer_position();
                match btn_state {
                    ElementState::Pressed => {
                        if egui_wants_pointer {
                            return;
                        }
                        state.handle_pointer(RawPointerEvent::Down { position, button });
                    }
                    // Releases always reach the canvas so gestures end cleanly.
                    ElementState::Released => {
                        state.handle_pointer(RawPointerEvent::Up { position, button });
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if egui_wants_pointer {
                    return;
                }
                state.handle_pointer(RawPointerEvent::Scroll {
                    delta: wheel_units(delta),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_keyboard || event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match ShortcutRegistry::lookup(&event.logical_key) {
                    Some(ShortcutAction::Mode(command)) => state.apply_command(command),
                    Some(ShortcutAction::Key(key)) => state.apply_key(key),
                    Some(ShortcutAction::ShowHelp) => ShortcutRegistry::print_all(),
                    None => {}
                }
            }

            _ => {}
        }
    }
}
