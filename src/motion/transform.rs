/// Position (px), scale, rotation (deg) and opacity of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub opacity: f64,
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    // Weighted form so t == 0 and t == 1 hit the endpoints exactly.
    from * (1.0 - t) + to * t
}

impl VisualTransform {
    pub const fn new(x: f64, y: f64, scale: f64, rotation: f64, opacity: f64) -> Self {
        Self { x, y, scale, rotation, opacity }
    }

    pub fn lerp(&self, to: &VisualTransform, t: f64) -> VisualTransform {
        let t = t.clamp(0.0, 1.0);
        VisualTransform {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
            rotation: lerp(self.rotation, to.rotation, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }

    pub fn offset_y(self, dy: f64) -> VisualTransform {
        VisualTransform { y: self.y + dy, ..self }
    }

    pub fn with_opacity(self, opacity: f64) -> VisualTransform {
        VisualTransform { opacity, ..self }
    }

    /// Inline style. `origin` is prepended to the transform, e.g. a
    /// centring translate.
    pub fn to_style(&self, origin: &str) -> String {
        format!(
            "transform: {} translate({:.2}px, {:.2}px) scale({:.4}) rotate({:.2}deg); opacity: {:.3};",
            origin, self.x, self.y, self.scale, self.rotation, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: VisualTransform = VisualTransform::new(200.0, 0.0, 1.05, 0.0, 1.0);
    const TO: VisualTransform = VisualTransform::new(-250.0, 100.0, 0.95, -3.0, 0.95);

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(FROM.lerp(&TO, 0.0), FROM);
        assert_eq!(FROM.lerp(&TO, 1.0), TO);
    }

    #[test]
    fn midpoint() {
        let mid = FROM.lerp(&TO, 0.5);
        assert!((mid.x - -25.0).abs() < 1e-9);
        assert!((mid.y - 50.0).abs() < 1e-9);
        assert!((mid.scale - 1.0).abs() < 1e-9);
        assert!((mid.rotation - -1.5).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(FROM.lerp(&TO, -0.3), FROM);
        assert_eq!(FROM.lerp(&TO, 1.7), TO);
    }

    #[test]
    fn style_contains_all_channels() {
        let style = TO.to_style("translate(-50%, -50%)");
        assert!(style.starts_with("transform: translate(-50%, -50%) translate(-250.00px, 100.00px)"));
        assert!(style.contains("scale(0.9500)"));
        assert!(style.contains("rotate(-3.00deg)"));
        assert!(style.ends_with("opacity: 0.950;"));
    }
}
