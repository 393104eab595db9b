use crate::error::AppError;
use crate::pipeline::read::read_package;
use crate::types::message::InfoMessage;
use crate::types::report::Package;

/// Summarizes every package in order, stopping at the first one that cannot be read.
pub fn build_report(packages: &[Package]) -> Result<Vec<InfoMessage>, AppError> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let training = read_package(&package.workout_type, &package.data)
                .map_err(|source| AppError::InvalidPackage { index, source })?;
            Ok(training.show_training_info())
        })
        .collect()
}

/// Reference readings: one swim, one run, one walk.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
