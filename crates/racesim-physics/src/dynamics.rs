//! Longitudinal dynamics: thrust vs. drag, braking, and the per-step
//! speed integrator.

use racesim_core::SectorType;

use crate::constants::*;

/// Maximum achievable acceleration this tick: engine power divided by
/// speed (floored to avoid a division blow-up at a standstill), clipped
/// by the grip-scaled traction limit, minus drag and rolling resistance.
/// May be negative (drag-limited).
pub fn max_acceleration(
    speed: f64,
    grip: f64,
    drs_open: bool,
    following_on_straight: bool,
    gap_to_ahead: f64,
    sector_type: SectorType,
) -> f64 {
    let speed_for_power = speed.max(MIN_SPEED_FOR_POWER_DIVISION);
    let power_accel = ENGINE_POWER_WATTS / (VEHICLE_MASS_KG * speed_for_power);
    let traction_limit = GRAVITY * TRACTION_ACCEL_MULTIPLIER * grip;
    let thrust_accel = power_accel.min(traction_limit);

    let drag_accel = drag_deceleration(
        speed,
        drs_open,
        following_on_straight && matches!(sector_type, SectorType::Straight),
        gap_to_ahead,
    );

    thrust_accel - drag_accel - ROLLING_RESISTANCE_ACCEL
}

fn drag_deceleration(speed: f64, drs_open: bool, slipstreaming: bool, gap_to_ahead: f64) -> f64 {
    let mut cda = DRAG_AREA_CDA;
    if drs_open {
        cda *= DRS_DRAG_MULTIPLIER;
    }
    if slipstreaming && gap_to_ahead < SLIPSTREAM_GAP_THRESHOLD_SECONDS {
        let max_reduction = if drs_open {
            SLIPSTREAM_MAX_DRAG_REDUCTION_WITH_DRS
        } else {
            SLIPSTREAM_MAX_DRAG_REDUCTION
        };
        let reduction =
            max_reduction * (1.0 - gap_to_ahead / SLIPSTREAM_GAP_THRESHOLD_SECONDS).clamp(0.0, 1.0);
        cda *= 1.0 - reduction;
    }
    let drag_force = 0.5 * AIR_DENSITY * cda * speed * speed;
    drag_force / VEHICLE_MASS_KG
}

/// Maximum braking deceleration this tick: mechanical plus a speed-squared
/// aerodynamic term, scaled by grip.
pub fn max_braking(speed: f64, grip: f64) -> f64 {
    (MECHANICAL_BRAKING_ACCEL + AERO_BRAKING_COEFFICIENT * speed * speed) * grip
}

/// One integration step toward `target_speed`: accelerate (clamped from
/// above) or brake (clamped from below), then apply the absolute clamps.
pub fn integrate_speed(current_speed: f64, target_speed: f64, accel: f64, brake: f64, dt: f64) -> f64 {
    let mut speed = if current_speed < target_speed {
        let candidate = current_speed + accel * dt;
        candidate.min(target_speed)
    } else {
        let candidate = current_speed - brake * dt;
        candidate.max(target_speed)
    };

    if speed.is_nan() {
        speed = 0.0;
    }
    speed.clamp(0.0, MAX_VEHICLE_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_upward_toward_target_without_overshoot() {
        let speed = integrate_speed(20.0, 30.0, 5.0, 10.0, 3.0);
        assert_eq!(speed, 30.0);
    }

    #[test]
    fn integrates_downward_toward_target_without_undershoot() {
        let speed = integrate_speed(40.0, 30.0, 5.0, 10.0, 3.0);
        assert_eq!(speed, 30.0);
    }

    #[test]
    fn nan_speed_is_clamped_to_zero() {
        let speed = integrate_speed(f64::NAN, 30.0, 5.0, 10.0, 1.0);
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn speed_never_exceeds_absolute_maximum() {
        let speed = integrate_speed(149.0, 500.0, 1000.0, 0.0, 1.0);
        assert!(speed <= MAX_VEHICLE_SPEED);
    }

    #[test]
    fn drag_limited_acceleration_can_go_negative_at_high_speed() {
        let accel = max_acceleration(149.0, 1.0, false, false, 10.0, SectorType::Straight);
        assert!(accel < 0.0);
    }

    #[test]
    fn drs_reduces_drag_and_increases_acceleration() {
        let without_drs = max_acceleration(80.0, 1.0, false, false, 10.0, SectorType::Straight);
        let with_drs = max_acceleration(80.0, 1.0, true, false, 10.0, SectorType::Straight);
        assert!(with_drs > without_drs);
    }

    #[test]
    fn braking_scales_with_grip() {
        let full_grip = max_braking(50.0, 1.0);
        let low_grip = max_braking(50.0, 0.5);
        assert!(full_grip > low_grip);
    }
}
