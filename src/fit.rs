//! Preview scale-to-fit.
//!
//! Computes the size of a preview rectangle with the content's aspect ratio,
//! fitted inside a container after shrinking it by a padding fraction on
//! every side. Pure geometry, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use aspectcalc::{Size, fit_scale};
//!
//! // 1000×1000 container, 10% padding → 800×800 usable; 16:9 fits width-first.
//! assert_eq!(fit_scale(1000.0, 1000.0, 16.0, 9.0), Size::new(800, 450));
//! ```

use num_traits::Float;

/// Padding removed from each side of the container, as a fraction of the
/// container's size on that axis.
pub const DEFAULT_PADDING: f64 = 0.1;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Zero size. Returned when there is nothing to fit into.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Fit content into a container with [`DEFAULT_PADDING`] on each side.
///
/// Returns [`Size::ZERO`] when the container has not been laid out yet
/// (non-positive size) or when the content is not a positive dimension pair.
pub fn fit_scale(container_w: f64, container_h: f64, content_w: f64, content_h: f64) -> Size {
    fit_scale_padded(container_w, container_h, content_w, content_h, DEFAULT_PADDING)
}

/// Fit content into a container shrunk by `padding` on each side.
///
/// `available = container × (1 − 2 × padding)` per axis, then the content is
/// scaled by `min(available_w / content_w, available_h / content_h)` and each
/// axis is floored. The result never exceeds the available area.
///
/// `padding` is clamped to `0.0..=0.5`; at `0.5` nothing is left and the
/// result is [`Size::ZERO`].
pub fn fit_scale_padded(
    container_w: f64,
    container_h: f64,
    content_w: f64,
    content_h: f64,
    padding: f64,
) -> Size {
    if !positive(container_w) || !positive(container_h) {
        return Size::ZERO;
    }
    if !positive(content_w) || !positive(content_h) {
        return Size::ZERO;
    }
    let padding = if padding.is_finite() {
        padding.clamp(0.0, 0.5)
    } else {
        0.0
    };

    let avail_w = container_w - 2.0 * container_w * padding;
    let avail_h = container_h - 2.0 * container_h * padding;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Size::ZERO;
    }

    let scale = (avail_w / content_w).min(avail_h / content_h);
    let w = Float::floor(content_w * scale).min(Float::floor(avail_w));
    let h = Float::floor(content_h * scale).min(Float::floor(avail_h));
    Size::new(w as u32, h as u32)
}

/// Offset that centers `inner` within a `outer_w` × `outer_h` box.
pub fn center_offset(inner: Size, outer_w: u32, outer_h: u32) -> (u32, u32) {
    let ox = outer_w.saturating_sub(inner.width) / 2;
    let oy = outer_h.saturating_sub(inner.height) / 2;
    (ox, oy)
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// One-shot deferred preview computation.
///
/// The container's rendered size is usually unknown at the moment a preview
/// is requested. [`request`](Self::request) records the content dimensions;
/// the next [`on_layout`](Self::on_layout) with a laid-out container fits
/// them and clears the request. Layout passes that report a zero-size
/// container leave the request pending.
///
/// ```
/// use aspectcalc::{PreviewSlot, Size};
///
/// let mut slot = PreviewSlot::new();
/// slot.request(4.0, 3.0);
/// assert_eq!(slot.on_layout(0.0, 0.0), None);
/// assert_eq!(slot.on_layout(500.0, 500.0), Some(Size::new(400, 300)));
/// assert_eq!(slot.on_layout(500.0, 500.0), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSlot {
    pending: Option<(f64, f64)>,
    padding: f64,
}

impl Default for PreviewSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSlot {
    /// Empty slot using [`DEFAULT_PADDING`].
    pub const fn new() -> Self {
        Self {
            pending: None,
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the padding fraction used when the request is fulfilled.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Record content to fit on the next layout pass. Replaces any
    /// earlier pending request.
    pub fn request(&mut self, content_w: f64, content_h: f64) {
        self.pending = Some((content_w, content_h));
    }

    /// Whether a request is waiting for layout.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fulfil the pending request against the laid-out container size.
    pub fn on_layout(&mut self, container_w: f64, container_h: f64) -> Option<Size> {
        if !positive(container_w) || !positive(container_h) {
            return None;
        }
        let (cw, ch) = self.pending.take()?;
        Some(fit_scale_padded(container_w, container_h, cw, ch, self.padding))
    }
}
