//! Live Simulation Parameters
//!
//! The slider-adjustable knobs exposed to the control surface. Each setter
//! clamps to the documented range, so out-of-range slider values degrade to
//! the nearest valid bound instead of failing. Systems read this resource
//! once per tick; changes between ticks take effect atomically on the next.

use bevy_ecs::prelude::*;

use crate::components::agent::SkepticismTier;

pub const SPEED_MIN: f32 = 1.0;
pub const SPEED_MAX: f32 = 100.0;
pub const WISE_EFFECT_MIN: f32 = 0.1;
pub const WISE_EFFECT_MAX: f32 = 1.0;
pub const NORMAL_EFFECT_MIN: f32 = 0.1;
pub const NORMAL_EFFECT_MAX: f32 = 3.0;
pub const GULLIBLE_EFFECT_MIN: f32 = 1.0;
pub const GULLIBLE_EFFECT_MAX: f32 = 3.0;

/// Opinion-leader slider ceiling on the control surface
pub const KOL_SLIDER_MAX: usize = 5;

/// Resource holding the live parameter set
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimParams {
    speed: f32,
    wise_effect: f32,
    normal_effect: f32,
    gullible_effect: f32,
}

impl SimParams {
    pub fn new(speed: f32, wise_effect: f32, normal_effect: f32, gullible_effect: f32) -> Self {
        let mut params = Self::default();
        params.set_speed(speed);
        params.set_wise_effect(wise_effect);
        params.set_normal_effect(normal_effect);
        params.set_gullible_effect(gullible_effect);
        params
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn wise_effect(&self) -> f32 {
        self.wise_effect
    }

    pub fn normal_effect(&self) -> f32 {
        self.normal_effect
    }

    pub fn gullible_effect(&self) -> f32 {
        self.gullible_effect
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn set_wise_effect(&mut self, effect: f32) {
        self.wise_effect = effect.clamp(WISE_EFFECT_MIN, WISE_EFFECT_MAX);
    }

    pub fn set_normal_effect(&mut self, effect: f32) {
        self.normal_effect = effect.clamp(NORMAL_EFFECT_MIN, NORMAL_EFFECT_MAX);
    }

    pub fn set_gullible_effect(&mut self, effect: f32) {
        self.gullible_effect = effect.clamp(GULLIBLE_EFFECT_MIN, GULLIBLE_EFFECT_MAX);
    }

    /// Effect multiplier selected by the target's skepticism tier
    pub fn tier_effect(&self, tier: SkepticismTier) -> f32 {
        match tier {
            SkepticismTier::Wise => self.wise_effect,
            SkepticismTier::Normal => self.normal_effect,
            SkepticismTier::Gullible => self.gullible_effect,
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            speed: 50.0,
            wise_effect: 0.1,
            normal_effect: 1.0,
            gullible_effect: 3.0,
        }
    }
}
