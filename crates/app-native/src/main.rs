//! Native desktop host: winit window, wgpu renderer, keyboard role picks.
//!
//! The web build selects roles through DOM cards; here `T`/`C` stand in for
//! them so the whole selection flow stays exercisable on desktop.

use std::time::Instant;

use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use app_core::{
    Camera, FrameContext, LineVertex, MeshVertex, Role, Scene, SceneFrame, SelectionView,
    SpriteInstance,
};
use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
}

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.055,
    g: 0.04,
    b: 0.12,
    a: 1.0,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprite_pipeline: wgpu::RenderPipeline,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    sprite_ib: wgpu::Buffer,
    mesh_vb: wgpu::Buffer,
    mesh_ib: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    /// Buffers are sized off `initial` once; the scene's primitive counts
    /// are constant for its whole life.
    async fn new(window: &'w winit::window::Window, initial: &SceneFrame) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(app_core::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let sprite_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "sprites",
            "vs_sprite",
            "fs_sprite",
            &[
                wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x4],
                },
            ],
            wgpu::PrimitiveTopology::TriangleList,
        );
        let mesh_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "meshes",
            "vs_mesh",
            "fs_mesh",
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4],
            }],
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "lines",
            "vs_line",
            "fs_line",
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4],
            }],
            wgpu::PrimitiveTopology::LineList,
        );

        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad_vb"),
            size: std::mem::size_of_val(&quad_vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&quad_vb, 0, bytemuck::cast_slice(&quad_vertices));

        let frame_buffer = |label: &'static str, len: usize, usage: wgpu::BufferUsages| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (len.max(1)) as u64,
                usage: usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let sprite_ib = frame_buffer(
            "sprite_ib",
            std::mem::size_of_val(initial.sprites.as_slice()),
            wgpu::BufferUsages::VERTEX,
        );
        let mesh_vb = frame_buffer(
            "mesh_vb",
            std::mem::size_of_val(initial.mesh_vertices.as_slice()),
            wgpu::BufferUsages::VERTEX,
        );
        let mesh_ib = frame_buffer(
            "mesh_ib",
            std::mem::size_of_val(initial.mesh_indices.as_slice()),
            wgpu::BufferUsages::INDEX,
        );
        let line_vb = frame_buffer(
            "line_vb",
            std::mem::size_of_val(initial.lines.as_slice()),
            wgpu::BufferUsages::VERTEX,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            sprite_pipeline,
            mesh_pipeline,
            line_pipeline,
            globals_buffer,
            bind_group,
            quad_vb,
            sprite_ib,
            mesh_vb,
            mesh_ib,
            line_vb,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, camera: &Camera, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: camera.view_proj().to_cols_array_2d(),
                cam_right: camera.right().extend(0.0).to_array(),
                cam_up: camera.up_world().extend(0.0).to_array(),
            }),
        );
        self.queue
            .write_buffer(&self.sprite_ib, 0, bytemuck::cast_slice(&frame.sprites));
        self.queue
            .write_buffer(&self.mesh_vb, 0, bytemuck::cast_slice(&frame.mesh_vertices));
        self.queue
            .write_buffer(&self.mesh_ib, 0, bytemuck::cast_slice(&frame.mesh_indices));
        self.queue
            .write_buffer(&self.line_vb, 0, bytemuck::cast_slice(&frame.lines));

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if !frame.lines.is_empty() {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_vertex_buffer(0, self.line_vb.slice(..));
                rpass.draw(0..frame.lines.len() as u32, 0..1);
            }
            if !frame.mesh_indices.is_empty() {
                rpass.set_pipeline(&self.mesh_pipeline);
                rpass.set_vertex_buffer(0, self.mesh_vb.slice(..));
                rpass.set_index_buffer(self.mesh_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..frame.mesh_indices.len() as u32, 0, 0..1);
            }
            if !frame.sprites.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sprite_ib.slice(..));
                rpass.draw(0..6, 0..frame.sprites.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut scene = Scene::new(seed);
    let mut selection = SelectionView::new();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Atelier (native)")
        .build(&event_loop)
        .expect("window");

    let initial = scene.compose();
    let mut state = pollster::block_on(GpuState::new(&window, &initial)).expect("gpu");
    let started = Instant::now();
    let mut cursor_px = Vec2::ZERO;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                cursor_px = Vec2::new(position.x as f32, position.y as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let now_sec = started.elapsed().as_secs_f64();
                match &event.logical_key {
                    Key::Character(c) if c.eq_ignore_ascii_case("t") => {
                        selection.select(Role::Tailor, now_sec);
                    }
                    Key::Character(c) if c.eq_ignore_ascii_case("c") => {
                        selection.select(Role::Customer, now_sec);
                    }
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    _ => {}
                }
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::AboutToWait => {
                let elapsed_sec = started.elapsed().as_secs_f64();
                let pointer = Vec2::new(
                    (cursor_px.x / state.width.max(1) as f32) * 2.0 - 1.0,
                    1.0 - (cursor_px.y / state.height.max(1) as f32) * 2.0,
                )
                .clamp(Vec2::NEG_ONE, Vec2::ONE);
                let ctx = FrameContext::new(elapsed_sec as f32, pointer);
                scene.update(&ctx);
                selection.advance(elapsed_sec);

                let camera = Camera::landing(state.width as f32 / state.height.max(1) as f32);
                let composed = scene.compose();
                match state.render(&camera, &composed) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    vs: &str,
    fs: &str,
    buffers: &[wgpu::VertexBufferLayout<'_>],
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
