//! Offscreen wgpu render pipeline for the escape-time shader.

use bytemuck::{Pod, Zeroable};

use wgpu::util::DeviceExt;

use crate::error::RenderError;
use crate::viewport::ViewRectangle;

/// Output texture format. Linear so intensities map straight to bytes.
const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Full-surface quad corners in clip space.
const QUAD_VERTICES: [[f32; 2]; 4] = [[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]];

/// Two triangles over the quad.
const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

/// Uniform block matching `View` in the shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct ViewUniform {
    /// (min_x, max_x, min_y, max_y)
    bounds: [f32; 4],
}

impl From<&ViewRectangle> for ViewUniform {
    fn from(view: &ViewRectangle) -> Self {
        Self {
            bounds: view.to_array(),
        }
    }
}

/// Render target and readback buffer sized for one surface resolution.
struct RenderTarget {
    width: u32,
    height: u32,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    readback: wgpu::Buffer,
    padded_bytes_per_row: u32,
}

/// GPU renderer for the Mandelbrot view.
pub struct GpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    /// Recreated when the requested resolution changes.
    target: Option<RenderTarget>,
    adapter_name: String,
}

impl GpuRenderer {
    /// Create the device, upload the quad and build the pipeline.
    pub fn new() -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok_or(RenderError::NoAdapter)?;

        let info = adapter.get_info();
        let adapter_name = format!("{} ({:?})", info.name, info.backend);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Mandelview GPU"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::Performance,
            },
            None,
        ))?;

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Uniform Buffer"),
            contents: bytemuck::bytes_of(&ViewUniform::from(&ViewRectangle::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("View Bind Group Layout"),
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
            label: Some("View Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mandelbrot Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Shader and pipeline errors are captured instead of panicking so the
        // validation log can be reported at startup.
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            include_str!("../shaders/mandelbrot.wgsl"),
        );
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::ShaderCompile(err.to_string()));
        }

        Ok(Self {
            device,
            queue,
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            target: None,
            adapter_name,
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader_source: &str,
    ) -> wgpu::RenderPipeline {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mandelbrot Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mandelbrot Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: TARGET_FORMAT,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Adapter name and backend, for logs and the HUD.
    pub fn adapter_name(&self) -> &str {
        &self.adapter_name
    }

    /// Largest texture side the device accepts.
    pub fn max_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    fn ensure_target(&mut self, width: u32, height: u32) {
        let stale = self
            .target
            .as_ref()
            .map_or(true, |t| t.width != width || t.height != height);

        if stale {
            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Mandelbrot Target"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: TARGET_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
                view_formats: &[],
            });
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            let padded_bytes_per_row = padded_bytes_per_row(width);
            let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Readback Buffer"),
                size: u64::from(padded_bytes_per_row) * u64::from(height),
                usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
                mapped_at_creation: false,
            });

            self.target = Some(RenderTarget {
                width,
                height,
                texture,
                view,
                readback,
                padded_bytes_per_row,
            });
        }
    }

    /// Render one frame of `view` at `width`×`height` and return RGBA rows.
    pub fn render(
        &mut self,
        view: &ViewRectangle,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 {
            return Ok(Vec::new());
        }

        // Publish the bounds for this frame
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&ViewUniform::from(view)),
        );

        self.ensure_target(width, height);
        let Some(target) = self.target.as_ref() else {
            return Ok(Vec::new());
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Mandelbrot Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mandelbrot Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
        }

        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &target.readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(target.padded_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        let buffer_slice = target.readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv().map_err(|_| RenderError::ReadbackChannel)??;

        let data = buffer_slice.get_mapped_range();
        let pixels = unpad_rows(&data, target.padded_bytes_per_row, width * 4, height);
        drop(data);
        target.readback.unmap();

        Ok(pixels)
    }
}

/// Row pitch rounded up to `COPY_BYTES_PER_ROW_ALIGNMENT`.
fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Strip the per-row padding the copy alignment introduced.
fn unpad_rows(data: &[u8], padded: u32, unpadded: u32, height: u32) -> Vec<u8> {
    if padded == unpadded {
        return data[..(unpadded * height) as usize].to_vec();
    }
    let mut pixels = Vec::with_capacity((unpadded * height) as usize);
    for row in data.chunks(padded as usize).take(height as usize) {
        pixels.extend_from_slice(&row[..unpadded as usize]);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bytes_per_row() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(800), 3328);
    }

    #[test]
    fn test_unpad_rows() {
        // 2 rows of 3 bytes padded to 5
        let data = [1, 2, 3, 0, 0, 4, 5, 6, 0, 0];
        assert_eq!(unpad_rows(&data, 5, 3, 2), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(unpad_rows(&[9, 8, 7, 6], 2, 2, 2), vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<ViewUniform>(), 16);
        let uniform = ViewUniform::from(&ViewRectangle::default());
        assert_eq!(uniform.bounds, [-2.0, 2.0, -1.5, 1.5]);
    }

    #[test]
    fn test_quad_covers_surface() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
        for corner in [[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]] {
            assert!(QUAD_VERTICES.contains(&corner));
        }
    }

    #[test]
    fn test_gpu_render_matches_kernel() {
        let mut renderer = match GpuRenderer::new() {
            Ok(r) => r,
            Err(e) if e.allows_cpu_fallback() => {
                eprintln!("Skipping GPU test: {e}");
                return;
            }
            Err(e) => panic!("renderer setup failed: {e}"),
        };

        let interior = renderer
            .render(&ViewRectangle::new(-0.1, 0.1, -0.1, 0.1), 8, 6)
            .unwrap();
        assert_eq!(interior.len(), 8 * 6 * 4);
        assert!(interior.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));

        let exterior = renderer
            .render(&ViewRectangle::new(10.0, 11.0, 10.0, 11.0), 8, 6)
            .unwrap();
        assert!(exterior.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
