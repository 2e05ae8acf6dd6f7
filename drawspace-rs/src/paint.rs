use drawspace_canvas2d::Canvas2dContext;
use std::ops::{Deref, DerefMut};

/// Saves the context's drawing state on creation and restores it on drop.
///
/// Style changes made through the guard never outlive it, including when a
/// draw bails out early with an error.
pub struct PaintGuard<'a> {
    ctx: &'a mut Canvas2dContext,
}

impl<'a> PaintGuard<'a> {
    pub fn new(ctx: &'a mut Canvas2dContext) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl Deref for PaintGuard<'_> {
    type Target = Canvas2dContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for PaintGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for PaintGuard<'_> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}
