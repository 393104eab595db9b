use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::message::InfoMessage;

/// Raw sensor reading: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    #[serde(flatten)]
    pub info: InfoMessage,
    pub message: String,
}

impl From<InfoMessage> for Summary {
    fn from(info: InfoMessage) -> Self {
        let message = info.message();
        Self { info, message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub created_at: DateTime<Utc>,
    pub summaries: Vec<Summary>,
}
