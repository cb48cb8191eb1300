use fastrand::Rng;

pub const SPARK_CADENCE_MS: u32 = 2000;
pub const MAX_LIVE_PARTICLES: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Small dot that rises and spins inside a section.
    Spark,
    /// Translucent bubble floating up through the hero.
    Bubble,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub id: u64,
    pub kind: ParticleKind,
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
    pub drift_px: f64,
    pub duration_ms: u32,
}

fn between(rng: &mut Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

impl ParticleSpec {
    pub fn spawn(kind: ParticleKind, id: u64, rng: &mut Rng) -> Self {
        match kind {
            ParticleKind::Spark => Self {
                id,
                kind,
                size_px: between(rng, 2.0, 6.0),
                left_pct: between(rng, 0.0, 100.0),
                top_pct: between(rng, 0.0, 100.0),
                opacity: 0.6,
                drift_px: 0.0,
                duration_ms: rng.u32(4000..7000),
            },
            ParticleKind::Bubble => Self {
                id,
                kind,
                size_px: between(rng, 8.0, 23.0),
                left_pct: between(rng, 0.0, 100.0),
                top_pct: 100.0,
                opacity: between(rng, 0.1, 0.5),
                drift_px: between(rng, -100.0, 100.0),
                duration_ms: rng.u32(6000..14000),
            },
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            ParticleKind::Spark => "dynamic-particle",
            ParticleKind::Bubble => "hero-bubble",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.2}%; top: {top:.2}%; \
             --peak-opacity: {opacity:.2}; --drift: {drift:.0}px; animation-duration: {duration}ms;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            drift = self.drift_px,
            duration = self.duration_ms,
        )
    }
}

/// Delay before the next spawn of `kind`.
pub fn next_spawn_delay(kind: ParticleKind, rng: &mut Rng) -> u32 {
    match kind {
        ParticleKind::Spark => SPARK_CADENCE_MS,
        ParticleKind::Bubble => rng.u32(1000..3000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparks_stay_within_ranges() {
        let mut rng = Rng::with_seed(7);
        for id in 0..500 {
            let spark = ParticleSpec::spawn(ParticleKind::Spark, id, &mut rng);
            assert!((2.0..=6.0).contains(&spark.size_px));
            assert!((0.0..=100.0).contains(&spark.left_pct));
            assert!((0.0..=100.0).contains(&spark.top_pct));
            assert!((4000..7000).contains(&spark.duration_ms));
            assert_eq!(spark.drift_px, 0.0);
        }
    }

    #[test]
    fn bubbles_stay_within_ranges() {
        let mut rng = Rng::with_seed(11);
        for id in 0..500 {
            let bubble = ParticleSpec::spawn(ParticleKind::Bubble, id, &mut rng);
            assert!((8.0..=23.0).contains(&bubble.size_px));
            assert!((0.1..=0.5).contains(&bubble.opacity));
            assert!((-100.0..=100.0).contains(&bubble.drift_px));
            assert!((6000..14000).contains(&bubble.duration_ms));
            assert_eq!(bubble.top_pct, 100.0);
        }
    }

    #[test]
    fn spawn_cadence() {
        let mut rng = Rng::with_seed(3);
        assert_eq!(next_spawn_delay(ParticleKind::Spark, &mut rng), SPARK_CADENCE_MS);
        for _ in 0..100 {
            assert!((1000..3000).contains(&next_spawn_delay(ParticleKind::Bubble, &mut rng)));
        }
    }

    #[test]
    fn style_carries_animation_duration() {
        let mut rng = Rng::with_seed(1);
        let spark = ParticleSpec::spawn(ParticleKind::Spark, 0, &mut rng);
        assert!(spark.style().contains(&format!("animation-duration: {}ms", spark.duration_ms)));
        assert_eq!(spark.class(), "dynamic-particle");
    }
}
