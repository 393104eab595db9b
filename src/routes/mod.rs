pub mod health;
pub mod reports;
pub mod workouts;
