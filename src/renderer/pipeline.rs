//! WebGPU render pipeline setup

use super::draw_list::DrawList;
use super::vertex::Vertex;

/// Convert screen pixel coordinates (origin top-left, Y down) to NDC
pub fn screen_to_ndc(logical_size: (f32, f32), x: f32, y: f32) -> (f32, f32) {
    let (w, h) = logical_size;
    (x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}

/// Clear color of a draw list as a wgpu color
fn to_wgpu_color([r, g, b, a]: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Vertex capacity to allocate for `needed` vertices: the next power of two,
/// at least one rectangle's worth
fn buffer_capacity(needed: usize) -> usize {
    needed.max(6).next_power_of_two()
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("orb_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn shape_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("shape_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("shape_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("shape_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Tessellated shapes have mixed winding
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// GPU side of the game: draws the tessellated shapes of a [`DrawList`].
/// Text runs are left to the host's overlay.
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    /// Vertices the buffer can hold
    capacity: usize,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Logical game screen the draw list coordinates refer to
    pub logical_size: (f32, f32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        logical_size: (f32, f32),
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orb-catcher-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = shape_pipeline(&device, format);
        let capacity = buffer_capacity(1024);
        let vertices = vertex_buffer(&device, capacity);
        log::debug!("Surface {}x{} as {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertices,
            capacity,
            size: (width, height),
            logical_size,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Convert the list to clip space and copy it into the vertex buffer,
    /// growing the buffer when the frame outgrows it. Returns the count.
    fn upload(&mut self, list: &DrawList) -> u32 {
        let clip: Vec<Vertex> = list
            .vertices()
            .iter()
            .map(|v| {
                let (x, y) = screen_to_ndc(self.logical_size, v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect();
        if clip.is_empty() {
            return 0;
        }

        if clip.len() > self.capacity {
            self.capacity = buffer_capacity(clip.len());
            self.vertices = vertex_buffer(&self.device, self.capacity);
        }
        self.queue
            .write_buffer(&self.vertices, 0, bytemuck::cast_slice(&clip));
        clip.len() as u32
    }

    /// Present one frame of `list`
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let count = self.upload(list);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(list.clear_color())),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if count > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertices.slice(..));
                pass.draw(0..count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
