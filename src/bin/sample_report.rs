use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::error::AppError;
use workout_tracker::pipeline::report::{build_report, sample_packages};

fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_tracker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for info in build_report(&sample_packages())? {
        println!("{}", info);
    }
    Ok(())
}
