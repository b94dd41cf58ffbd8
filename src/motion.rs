//! Pointer parallax for the hero section.
//!
//! Everything here is plain arithmetic on a normalized pointer; the easing
//! between positions is left to CSS transitions.

/// Pointer position inside an element, each axis in `[-1, 1]` with the center at `(0, 0)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.0, y: 0.0 };

    /// Normalizes a client-space position against an element's bounding box.
    /// A degenerate box yields the center.
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::CENTER;
        }
        let x = (client_x - left) / width;
        let y = (client_y - top) / height;
        Pointer {
            x: ((x - 0.5) * 2.0).clamp(-1.0, 1.0),
            y: ((y - 0.5) * 2.0).clamp(-1.0, 1.0),
        }
    }
}

/// Linear map from `input` onto `output`, clamped to the output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

/// A decorative layer that drifts against the pointer. Bigger amplitude reads as closer to the back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub amp_x: f64,
    pub amp_y: f64,
}

impl Layer {
    pub const BACKGROUND: Layer = Layer { amp_x: 15.0, amp_y: 12.0 };
    pub const MID: Layer = Layer { amp_x: 8.0, amp_y: 6.0 };
    pub const FOREGROUND: Layer = Layer { amp_x: 4.0, amp_y: 3.0 };
    pub const CARD: Layer = Layer { amp_x: 10.0, amp_y: 8.0 };

    /// Pixel offset; pointer right/down moves the layer left/up.
    pub fn offset(&self, p: Pointer) -> (f64, f64) {
        (
            map_range(p.x, (-1.0, 1.0), (self.amp_x, -self.amp_x)),
            map_range(p.y, (-1.0, 1.0), (self.amp_y, -self.amp_y)),
        )
    }

    pub fn translate(&self, p: Pointer) -> String {
        let (x, y) = self.offset(p);
        format!("transform: translate3d({x:.2}px, {y:.2}px, 0)")
    }
}

/// Tilt in degrees around the X and Y axes for a given pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub max_deg: f64,
}

impl Tilt {
    pub const CONTENT: Tilt = Tilt { max_deg: 6.0 };
    pub const CARD: Tilt = Tilt { max_deg: 12.0 };

    pub fn angles(&self, p: Pointer) -> (f64, f64) {
        let m = self.max_deg;
        (
            map_range(p.y, (-1.0, 1.0), (m, -m)),
            map_range(p.x, (-1.0, 1.0), (-m, m)),
        )
    }

    pub fn rotate(&self, p: Pointer, perspective_px: u32) -> String {
        let (rx, ry) = self.angles(p);
        format!("perspective({perspective_px}px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)")
    }
}

/// Combined tilt and drift for the showcase card
pub fn card_transform(p: Pointer) -> String {
    let (x, y) = Layer::CARD.offset(p);
    format!(
        "transform: {} translate3d({x:.2}px, {y:.2}px, 0); transform-style: preserve-3d",
        Tilt::CARD.rotate(p, 1200)
    )
}

const STAGGER_START_SECS: f64 = 0.1;
const STAGGER_STEP_SECS: f64 = 0.15;

/// Entry animation delay for the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize) -> f64 {
    STAGGER_START_SECS + STAGGER_STEP_SECS * index as f64
}

pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.2}s", stagger_delay(index))
}
