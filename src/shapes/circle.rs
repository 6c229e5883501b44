#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Radius must be finite and strictly positive to produce usable bounds.
    pub fn is_valid(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0
    }
}
