use crate::error::PackageError;
use crate::types::training::{Running, SportsWalking, Swimming, Training, WorkoutType};

type Reader = fn(&[f64]) -> Result<Box<dyn Training>, PackageError>;

static READERS: [(WorkoutType, Reader); 3] = [
    (WorkoutType::Swimming, read_swimming as Reader),
    (WorkoutType::Running, read_running as Reader),
    (WorkoutType::SportsWalking, read_sports_walking as Reader),
];

/// Builds the workout matching `workout_type` from its positional sensor values.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let (kind, reader) = READERS
        .iter()
        .find(|(kind, _)| kind.code() == workout_type)
        .ok_or_else(|| PackageError::UnknownWorkoutType(workout_type.to_string()))?;

    tracing::debug!("Reading {} package with {} values", kind, data.len());
    reader(data)
}

fn read_running(data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let [action, duration, weight] = unpack(WorkoutType::Running, data)?;
    Ok(Box::new(Running::new(
        count("action", action)?,
        positive("duration", duration)?,
        positive("weight", weight)?,
    )))
}

fn read_sports_walking(data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let [action, duration, weight, height] = unpack(WorkoutType::SportsWalking, data)?;
    Ok(Box::new(SportsWalking::new(
        count("action", action)?,
        positive("duration", duration)?,
        positive("weight", weight)?,
        positive("height", height)?,
    )))
}

fn read_swimming(data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let [action, duration, weight, length_pool, count_pool] =
        unpack(WorkoutType::Swimming, data)?;
    Ok(Box::new(Swimming::new(
        count("action", action)?,
        positive("duration", duration)?,
        positive("weight", weight)?,
        positive("length_pool", length_pool)?,
        count("count_pool", count_pool)?,
    )))
}

fn unpack<const N: usize>(kind: WorkoutType, data: &[f64]) -> Result<[f64; N], PackageError> {
    debug_assert_eq!(kind.fields().len(), N);
    data.try_into().map_err(|_| PackageError::ArityMismatch {
        workout_type: kind.code(),
        expected: N,
        actual: data.len(),
    })
}

fn count(field: &'static str, value: f64) -> Result<u64, PackageError> {
    let invalid = |reason: &'static str| PackageError::InvalidValue {
        field,
        value,
        reason,
    };
    if !value.is_finite() {
        return Err(invalid("must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid("must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(invalid("must be a whole number"));
    }
    // 2^64 and above would saturate in the cast.
    if value >= u64::MAX as f64 {
        return Err(invalid("is out of range"));
    }
    Ok(value as u64)
}

fn positive(field: &'static str, value: f64) -> Result<f64, PackageError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PackageError::InvalidValue {
            field,
            value,
            reason: "must be a positive number",
        })
    }
}
