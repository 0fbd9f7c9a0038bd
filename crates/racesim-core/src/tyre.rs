//! Static compound table and the pure wear/grip functions over it.

use serde::{Deserialize, Serialize};

use crate::vehicle::PaceMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TyreCompound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
}

/// Per-compound static characteristics. Values are chosen to preserve the
/// ordering the domain implies (soft fastest and softest-wearing, hard
/// slowest and hardest-wearing; rain compounds lose nothing to water) and
/// are not given literal numbers by the domain description.
#[derive(Debug, Clone, Copy)]
pub struct CompoundCharacteristics {
    pub base_pace_delta: f64,
    pub base_wear_rate: f64,
    pub grip: f64,
    pub optimal_temp_window: (f64, f64),
    pub rain_performance: f64,
}

impl TyreCompound {
    pub fn characteristics(self) -> CompoundCharacteristics {
        use TyreCompound::*;
        match self {
            Soft => CompoundCharacteristics {
                base_pace_delta: 0.0,
                base_wear_rate: 0.075,
                grip: 1.05,
                optimal_temp_window: (95.0, 115.0),
                rain_performance: 0.1,
            },
            Medium => CompoundCharacteristics {
                base_pace_delta: 0.35,
                base_wear_rate: 0.045,
                grip: 1.0,
                optimal_temp_window: (90.0, 110.0),
                rain_performance: 0.1,
            },
            Hard => CompoundCharacteristics {
                base_pace_delta: 0.7,
                base_wear_rate: 0.028,
                grip: 0.95,
                optimal_temp_window: (85.0, 105.0),
                rain_performance: 0.1,
            },
            Intermediate => CompoundCharacteristics {
                base_pace_delta: 1.8,
                base_wear_rate: 0.04,
                grip: 0.8,
                optimal_temp_window: (50.0, 85.0),
                rain_performance: 0.85,
            },
            Wet => CompoundCharacteristics {
                base_pace_delta: 3.0,
                base_wear_rate: 0.035,
                grip: 0.7,
                optimal_temp_window: (30.0, 65.0),
                rain_performance: 1.0,
            },
        }
    }
}

/// `basePace` multiplier for the current pace mode, per §4.2. Also used
/// by the physics resource-consumption model (fuel burn scales with the
/// same aggressive/conservative split as tyre wear).
pub fn pace_multiplier(pace_mode: PaceMode) -> f64 {
    match pace_mode {
        PaceMode::Aggressive => 1.3,
        PaceMode::Conservative => 0.7,
        PaceMode::Balanced => 1.0,
    }
}

/// Wear accrued this second: base rate x abrasion factor x pace
/// multiplier x escalation once wear passes 60 and again past 80.
pub fn wear_rate(
    compound: TyreCompound,
    track_degradation_factor: f64,
    pace_mode: PaceMode,
    current_wear: f64,
) -> f64 {
    let base = compound.characteristics().base_wear_rate;
    let mut rate = base * track_degradation_factor * pace_multiplier(pace_mode);
    if current_wear > 60.0 {
        rate *= 1.1;
    }
    if current_wear > 80.0 {
        rate *= 1.2;
    }
    rate
}

/// Non-linear wear penalty: a three-piece curve, 0-40% costs up to 2%,
/// 40-70% up to 7% cumulative, 70-100% up to 22% cumulative ("the cliff").
fn wear_penalty(wear: f64) -> f64 {
    let w = wear.clamp(0.0, 100.0);
    if w <= 40.0 {
        (w / 40.0) * 0.02
    } else if w <= 70.0 {
        0.02 + ((w - 40.0) / 30.0) * 0.05
    } else {
        0.07 + ((w - 70.0) / 30.0) * 0.15
    }
}

/// Compound-specific water-grip multiplier, in `[0, 1]`.
fn water_multiplier(compound: TyreCompound, water_depth_mm: f64) -> f64 {
    let w = water_depth_mm.max(0.0);
    match compound {
        TyreCompound::Soft | TyreCompound::Medium | TyreCompound::Hard => {
            // Slicks lose grip exponentially as water accumulates.
            (-1.8 * w).exp()
        }
        TyreCompound::Intermediate => {
            // Bell curve centered near 1.5mm, optimal window 0.5-2.5mm.
            let center = 1.5;
            let spread = 1.2;
            (-((w - center) / spread).powi(2)).exp()
        }
        TyreCompound::Wet => {
            // Sigmoid plateau: punishes dry use, rewards standing water.
            1.0 / (1.0 + (-2.5 * (w - 0.5)).exp())
        }
    }
}

/// Overall grip factor in `[0.1, ~1.1]`: base grip, wear penalty, then the
/// compound's water-grip curve. Floored at 0.1.
pub fn grip_factor(compound: TyreCompound, wear: f64, water_depth_mm: f64) -> f64 {
    let base = compound.characteristics().grip;
    let after_wear = base * (1.0 - wear_penalty(wear));
    let after_water = after_wear * water_multiplier(compound, water_depth_mm);
    after_water.max(0.1)
}
