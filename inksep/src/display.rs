//! Mask display sinks

use crate::pipeline::Separation;
use inksep_core::Mask;

/// Receives each emitted mask for preview.
pub trait DisplaySink {
    /// Show one mask under its output name.
    fn show(&mut self, name: &str, mask: &Mask);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show(&mut self, _name: &str, _mask: &Mask) {}
}

/// Logs name, size and pixel count of each mask at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DisplaySink for LogSink {
    fn show(&mut self, name: &str, mask: &Mask) {
        log::info!(
            "{}: {}x{}, {} px",
            name,
            mask.width(),
            mask.height(),
            mask.count()
        );
    }
}

/// Pass every mask of a separation to `sink`, in output order.
pub fn show_separation<S: DisplaySink + ?Sized>(separation: &Separation, sink: &mut S) {
    for m in &separation.masks {
        sink.show(&m.name, &m.mask);
    }
}
