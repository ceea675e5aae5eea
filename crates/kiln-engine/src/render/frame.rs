use crate::paint::Color;

/// Borrow of the current frame's command encoder and color target, passed to
/// [`App::render`](crate::core::App::render).
///
/// Passes recorded here are submitted (and the frame presented) by the
/// runtime once the hook returns.
pub struct RenderFrame<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    view: &'a wgpu::TextureView,
}

impl<'a> RenderFrame<'a> {
    pub(crate) fn new(encoder: &'a mut wgpu::CommandEncoder, view: &'a wgpu::TextureView) -> Self {
        Self { encoder, view }
    }

    /// Records a pass that clears the whole target to `color`.
    ///
    /// This is the default render hook's entire body.
    pub fn clear(&mut self, color: Color) {
        // The pass is dropped immediately; the clear is carried by the load op.
        let _rpass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("kiln clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    /// Escape hatch for derived applications that record their own passes.
    pub fn encoder(&mut self) -> &mut wgpu::CommandEncoder {
        self.encoder
    }

    /// The frame's color target view.
    pub fn view(&self) -> &wgpu::TextureView {
        self.view
    }
}
