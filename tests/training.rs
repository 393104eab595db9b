use workout_tracker::types::training::{
    floor_div, Running, SportsWalking, Swimming, Training, WorkoutType,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn running_follows_step_formulas() {
    for (action, duration, weight) in [(15000, 1.0, 75.0), (8000, 0.75, 62.5), (0, 2.0, 90.0)] {
        let running = Running::new(action, duration, weight);
        let distance = action as f64 * 0.65 / 1000.0;
        let speed = distance / duration;

        assert_close(running.distance(), distance);
        assert_close(running.mean_speed(), speed);
        assert_close(
            running.spent_calories(),
            (18.0 * speed - 20.0) * weight / 1000.0 * (duration * 60.0),
        );
    }
}

#[test]
fn running_reference_package() {
    let running = Running::new(15000, 1.0, 75.0);

    assert_close(running.distance(), 9.75);
    assert_close(running.mean_speed(), 9.75);
    assert_close(running.spent_calories(), 699.75);
}

#[test]
fn walking_floors_speed_over_height() {
    // 5.85^2 / 180 is below one, so the ratio term vanishes.
    let slow = SportsWalking::new(9000, 1.0, 75.0, 180.0);
    assert_close(slow.distance(), 5.85);
    assert_close(slow.spent_calories(), 157.5);

    // 19.5^2 / 180 = 2.1125, floored to 2.
    let fast = SportsWalking::new(30000, 1.0, 75.0, 180.0);
    assert_close(fast.mean_speed(), 19.5);
    assert_close(
        fast.spent_calories(),
        (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0,
    );
}

#[test]
fn swimming_speed_ignores_strokes() {
    let few = Swimming::new(0, 2.0, 70.0, 50.0, 20);
    let many = Swimming::new(5000, 2.0, 70.0, 50.0, 20);

    assert_close(few.mean_speed(), 50.0 * 20.0 / 1000.0 / 2.0);
    assert_close(many.mean_speed(), few.mean_speed());
    assert_close(many.distance(), 5000.0 * 1.38 / 1000.0);
}

#[test]
fn swimming_reference_package() {
    let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);

    assert_close(swimming.distance(), 0.9936);
    assert_close(swimming.mean_speed(), 1.0);
    assert_close(swimming.spent_calories(), (40.0 * 25.0 / 1000.0 / 1.0 + 1.1) * 2.0 * 80.0);
}

#[test]
fn training_info_uses_display_name() {
    let info = SportsWalking::new(9000, 1.0, 75.0, 180.0).show_training_info();

    assert_eq!(info.training_type, "SportsWalking");
    assert_close(info.duration, 1.0);
    assert_close(info.distance, 5.85);
    assert_close(info.speed, 5.85);
    assert_close(info.calories, 157.5);
}

#[test]
fn floor_div_rounds_toward_negative_infinity() {
    assert_eq!(floor_div(7.0, 2.0), 3.0);
    assert_eq!(floor_div(-7.0, 2.0), -4.0);
    assert_eq!(floor_div(34.2225, 180.0), 0.0);
    assert_eq!(floor_div(380.25, 180.0), 2.0);
}

#[test]
fn workout_type_codes_and_arity() {
    assert_eq!(WorkoutType::Running.code(), "RUN");
    assert_eq!(WorkoutType::SportsWalking.code(), "WLK");
    assert_eq!(WorkoutType::Swimming.code(), "SWM");
    assert_eq!(WorkoutType::Running.fields().len(), 3);
    assert_eq!(WorkoutType::SportsWalking.fields().len(), 4);
    assert_eq!(WorkoutType::Swimming.fields().len(), 5);
}
