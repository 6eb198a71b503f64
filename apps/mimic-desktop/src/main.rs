use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use mimic_core::{
    SceneController, Settings, LINE_WIDTH_RANGE, REPEAT_RANGE, ROTATION_RANGE, SLIDER_STEP,
};
use mimic_render_wgpu::StripeRenderer;
use mimic_text::FontMeshTask;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Em size of the text mesh in world units.
const TEXT_SIZE: f32 = 1.0;
/// Extrusion depth of the text mesh.
const TEXT_DEPTH: f32 = 0.2;

#[derive(Parser)]
#[command(name = "mimic-desktop", about = "Stripe shader demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Font file used to build the text mesh
    #[arg(long, default_value = "assets/fonts/helvetiker_regular.ttf")]
    font: PathBuf,

    /// Label rendered as the 3D text mesh
    #[arg(long, default_value = "mimic")]
    label: String,
}

/// Debug panel: three sliders bound straight into the settings record.
fn draw_panel(ctx: &EguiContext, settings: &mut Settings) {
    egui::Window::new("settings")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut settings.rotation, ROTATION_RANGE)
                    .step_by(SLIDER_STEP)
                    .text("rotation"),
            );
            ui.add(
                egui::Slider::new(&mut settings.repeat, REPEAT_RANGE)
                    .step_by(SLIDER_STEP)
                    .text("repeat"),
            );
            ui.add(
                egui::Slider::new(&mut settings.line_width, LINE_WIDTH_RANGE)
                    .step_by(SLIDER_STEP)
                    .text("line width"),
            );
        });
}

struct DemoApp {
    font: PathBuf,
    label: String,
    controller: Option<SceneController>,
    font_task: Option<FontMeshTask>,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<StripeRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl DemoApp {
    fn new(font: PathBuf, label: String) -> Self {
        Self {
            font,
            label,
            controller: None,
            font_task: None,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("mimic")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("mimic_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let controller = SceneController::new(config.width as f32, config.height as f32);
        let renderer = StripeRenderer::new(&device, surface_format, config.width, config.height);

        // Kick off the font build; the tick loop keeps running and the
        // text mesh joins the scene whenever it is ready.
        self.font_task = Some(FontMeshTask::spawn(
            self.font.clone(),
            self.label.clone(),
            TEXT_SIZE,
            TEXT_DEPTH,
        ));

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.controller = Some(controller);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    if let Some(controller) = &mut self.controller {
                        controller.resize(config.width as f32, config.height as f32);
                    }
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(controller) = &mut self.controller {
                    controller.pointer_moved(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::Touch(touch) => {
                // A touch drives the same handler as the mouse.
                if matches!(touch.phase, TouchPhase::Started | TouchPhase::Moved) {
                    if let Some(controller) = &mut self.controller {
                        controller
                            .pointer_moved(touch.location.x as f32, touch.location.y as f32);
                    }
                }
            }
            WindowEvent::Occluded(occluded) => {
                if let Some(controller) = &mut self.controller {
                    if occluded {
                        tracing::debug!("window occluded, pausing");
                        controller.pause();
                    } else {
                        tracing::debug!("window visible, resuming");
                        controller.play();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(controller) = &mut self.controller else {
                    return;
                };

                // Adopt the text mesh if the background build finished.
                if let Some(task) = &mut self.font_task {
                    match task.poll() {
                        Some(Ok(mesh)) => controller.insert_text(mesh),
                        Some(Err(e)) => {
                            tracing::warn!("text mesh unavailable: {e}");
                        }
                        None => {}
                    }
                }

                controller.tick();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &mut self.renderer {
                    renderer.render(device, queue, &view, controller);
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    draw_panel(ctx, &mut controller.settings);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
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

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("mimic-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(cli.font, cli.label);
    event_loop.run_app(&mut app)?;

    Ok(())
}
