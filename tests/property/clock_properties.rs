// Property-based tests for the clock face geometry and hour/minute picking

use std::f32::consts::TAU;

use chrono::{NaiveDate, Timelike};
use egui::Pos2;
use proptest::prelude::*;
use rust_pickers::models::clock::{ClockMode, Period};
use rust_pickers::services::clock::geometry::{
    angle_from_twelve, angle_to_index, angle_to_value, point_at, position_angle,
};
use rust_pickers::services::clock::{
    minute_options, ClockConfig, ClockEngine, PointerPhase, PointerSample,
};
use rust_pickers::services::selection::ChangeSink;

const CENTER: Pos2 = Pos2::new(115.0, 115.0);

proptest! {
    /// Property: the angle from 12 o'clock is always normalized
    #[test]
    fn prop_angle_is_normalized(x in -500.0f32..500.0, y in -500.0f32..500.0) {
        let angle = angle_from_twelve(Pos2::new(x, y), CENTER);
        prop_assert!((0.0..TAU).contains(&angle));
    }

    /// Property: every point maps to a valid slot index
    #[test]
    fn prop_index_in_range(x in -500.0f32..500.0, y in -500.0f32..500.0, count in 1usize..120) {
        prop_assert!(angle_to_index(Pos2::new(x, y), CENTER, count) < count);
    }

    /// Property: each slot's own position maps back to that slot
    #[test]
    fn prop_every_slot_is_reachable(count in 1usize..120, radius in 10.0f32..200.0) {
        for index in 0..count {
            let point = point_at(CENTER, radius, position_angle(index as f32, count as u32));
            prop_assert_eq!(angle_to_index(point, CENTER, count), index);
        }
    }

    /// Property: with a minute interval the snapped value is always a selectable minute
    #[test]
    fn prop_interval_snaps_to_option(interval in 1u32..=60, minute in 0.0f32..60.0) {
        let options = minute_options(Some(interval));
        let point = point_at(CENTER, 80.0, position_angle(minute, 60));
        let value = angle_to_value(point, CENTER, &options, 60).unwrap();
        prop_assert_eq!(value % interval, 0);
    }

    /// Property: picking an hour never changes AM/PM
    #[test]
    fn prop_hour_pick_keeps_period(hour in 0u32..24, minute in 0u32..60, target in 1u32..=12) {
        let value = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        let mut engine = ClockEngine::new(ClockConfig::new(Some(value)));
        let mut sink = ChangeSink::new();
        let point = point_at(CENTER, 80.0, position_angle((target % 12) as f32, 12));

        engine.handle_pointer(PointerSample::new(PointerPhase::Down, point), CENTER, &mut sink);
        engine.handle_pointer(PointerSample::new(PointerPhase::Up, point), CENTER, &mut sink);

        let picked = sink.last_change().unwrap();
        prop_assert_eq!(Period::of_hour(picked.hour()), Period::of_hour(hour));
        prop_assert_eq!(picked.minute(), minute);
        prop_assert_eq!(engine.mode(), ClockMode::Minute);
    }
}
