/// Clamped linear map from an input domain onto an output range.
///
/// Inputs outside `domain` take the output of the nearest endpoint; the map
/// never extrapolates. The range may be descending (e.g. fading opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearMap {
    /// `domain.0` must be strictly less than `domain.1`.
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, input: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if input.is_nan() || input <= d0 {
            return r0;
        }
        if input >= d1 {
            return r1;
        }
        let t = (input - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }
}

pub const DISPLACEMENT: LinearMap = LinearMap::new((0.0, 400.0), (0.0, 60.0));
pub const OPACITY: LinearMap = LinearMap::new((0.0, 300.0), (1.0, 0.2));

/// Scroll-driven transform of the hero content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub displacement: LinearMap,
    pub opacity: LinearMap,
}

impl Default for HeroParallax {
    fn default() -> Self {
        Self {
            displacement: DISPLACEMENT,
            opacity: OPACITY,
        }
    }
}

impl HeroParallax {
    pub fn translate_y(&self, scroll_y: f64) -> f64 {
        self.displacement.apply(scroll_y)
    }

    pub fn opacity(&self, scroll_y: f64) -> f64 {
        self.opacity.apply(scroll_y)
    }

    /// Inline CSS `transform` value for the given offset.
    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({:.2}px)", self.translate_y(scroll_y))
    }
}
