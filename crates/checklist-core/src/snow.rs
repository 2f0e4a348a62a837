//! Snowfall particles for the background canvas.

use std::f64::consts::TAU;

use crate::random::RandomSource;

const SWAY_STEP: f64 = 0.02;
const SWAY_AMPLITUDE: f64 = 0.8;
const RESPAWN_Y: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Vertical speed per frame
    pub speed: f64,
    pub opacity: f64,
    pub sway_phase: f64,
}

impl Snowflake {
    fn spawn(width: f64, height: f64, at_top: bool, random: &dyn RandomSource) -> Self {
        Self {
            x: random.between(0.0, width),
            y: if at_top { RESPAWN_Y } else { random.between(0.0, height) },
            radius: random.between(2.0, 6.0),
            speed: random.between(0.5, 2.0),
            opacity: random.between(0.3, 0.8),
            sway_phase: random.between(0.0, TAU),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Snowfall {
    width: f64,
    height: f64,
    flakes: Vec<Snowflake>,
}

impl Snowfall {
    pub fn new(width: f64, height: f64, count: usize, random: &dyn RandomSource) -> Self {
        let flakes = (0..count)
            .map(|_| Snowflake::spawn(width, height, false, random))
            .collect();
        Self { width, height, flakes }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame
    pub fn step(&mut self, random: &dyn RandomSource) {
        let (width, height) = (self.width, self.height);
        for flake in &mut self.flakes {
            flake.y += flake.speed;
            flake.sway_phase += SWAY_STEP;
            flake.x += flake.sway_phase.sin() * SWAY_AMPLITUDE;

            if flake.y > height {
                *flake = Snowflake::spawn(width, height, true, random);
            }
            if flake.x > width {
                flake.x = 0.0;
            } else if flake.x < 0.0 {
                flake.x = width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedRandom;

    #[test]
    fn test_spawn_ranges() {
        let snow = Snowfall::new(800.0, 600.0, 200, &FixedRandom(0.5));
        assert_eq!(snow.flakes().len(), 200);
        let flake = snow.flakes()[0];
        assert_eq!((flake.x, flake.y), (400.0, 300.0));
        assert_eq!(flake.radius, 4.0);
        assert_eq!(flake.speed, 1.25);
    }

    #[test]
    fn test_flake_falls() {
        let mut snow = Snowfall::new(800.0, 600.0, 1, &FixedRandom(0.5));
        let before = snow.flakes()[0];
        snow.step(&FixedRandom(0.5));
        let after = snow.flakes()[0];
        assert_eq!(after.y, before.y + before.speed);
        assert!((after.sway_phase - before.sway_phase - SWAY_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_flake_respawns_at_top() {
        let mut snow = Snowfall::new(800.0, 600.0, 1, &FixedRandom(0.999));
        snow.step(&FixedRandom(0.5));
        let flake = snow.flakes()[0];
        assert_eq!(flake.y, RESPAWN_Y);
        assert_eq!(flake.x, 400.0);
    }

    #[test]
    fn test_flake_wraps_horizontally() {
        let mut snow = Snowfall::new(100.0, 1000.0, 1, &FixedRandom(0.0));
        snow.flakes[0].x = 100.4;
        snow.flakes[0].sway_phase = std::f64::consts::FRAC_PI_2 - SWAY_STEP;
        snow.step(&FixedRandom(0.0));
        assert_eq!(snow.flakes()[0].x, 0.0);

        snow.resize(50.0, 1000.0);
        snow.flakes[0].x = -0.1;
        snow.flakes[0].sway_phase = -std::f64::consts::FRAC_PI_2 - SWAY_STEP;
        snow.step(&FixedRandom(0.0));
        assert_eq!(snow.flakes()[0].x, 50.0);
    }
}
