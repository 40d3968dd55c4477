use tracing::{debug, info, warn};

use super::interface::Outcome;

/// The user-facing lines for one handled action.
pub fn render_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Listed(employees) => {
            if employees.is_empty() {
                return vec!["no employee".to_string()];
            }
            employees.iter().map(|e| e.to_string()).collect()
        }
        Outcome::Inserted(id) => vec![id.to_string()],
        Outcome::InsertFailed(_) => vec!["the inputted data is invalid".to_string()],
        Outcome::InvalidAge(_) => vec!["age must be a value of integer".to_string()],
        Outcome::NoSuchOption(_) => vec!["no such option".to_string()],
        Outcome::Abandoned => Vec::new(),
    }
}

pub fn display_outcome(outcome: &Outcome) {
    let lines = render_outcome(outcome);
    match outcome {
        Outcome::Listed(employees) => {
            for employee in employees {
                if let Ok(json) = serde_json::to_string(employee) {
                    debug!(document = %json, "listed");
                }
            }
            lines.iter().for_each(|line| info!("{}", line));
        }
        Outcome::Inserted(_) => lines.iter().for_each(|line| info!("{}", line)),
        Outcome::InsertFailed(error) => {
            lines.iter().for_each(|line| warn!(%error, "{}", line))
        }
        Outcome::InvalidAge(input) | Outcome::NoSuchOption(input) => {
            lines.iter().for_each(|line| warn!(input = %input, "{}", line))
        }
        Outcome::Abandoned => debug!("input ended mid-insert, nothing written"),
    }
}
