use std::time::Duration;

use simple_slider::{Px, SlideSet, Surface};
use tracing::info;

/// Surface that logs every command instead of drawing.
#[derive(Debug, Default)]
pub struct LogSurface {
    commands: usize,
}

impl LogSurface {
    /// Number of commands received so far.
    pub fn commands(&self) -> usize {
        self.commands
    }
}

impl Surface for LogSurface {
    fn set_transition_duration(&mut self, duration: Duration) {
        self.commands += 1;
        info!("transition {}ms", duration.as_millis());
    }

    fn set_wrapper_offset(&mut self, offset: Px) {
        self.commands += 1;
        info!("wrapper at -{offset}");
    }

    fn set_active_bullet(&mut self, index: usize) {
        self.commands += 1;
        info!("bullet {index} active");
    }

    fn set_layout(&mut self, slide_width: Px, wrapper_width: Px) {
        self.commands += 1;
        info!("slides {slide_width} wide, wrapper {wrapper_width}");
    }

    fn mount_clones(&mut self, slides: &SlideSet) {
        self.commands += 1;
        for slide in slides.positions().filter(|slide| slide.is_clone) {
            info!("clone of slide {} at {}", slide.source, slide.position);
        }
    }
}
