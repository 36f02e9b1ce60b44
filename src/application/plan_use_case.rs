// ============================================================
// Layer 2 — PlanUseCase
// ============================================================
// Builds a study plan and optionally exports it:
//
//   Step 1: Generate the schedule       (Layer 5b - study)
//   Step 2: Write CSV if requested      (Layer 6 - infra)

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::domain::study::StudyPlan;
use crate::infra::export::export_plan_csv;
use crate::study::planner::generate_study_plan;

/// Longest plan anyone should ask for in a day
const MAX_HOURS: f64 = 24.0;

#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub subject:  String,
    pub hours:    f64,
    pub scenario: String,
    pub csv:      Option<PathBuf>,
}

pub struct PlanUseCase {
    request: PlanRequest,
}

impl PlanUseCase {
    pub fn new(request: PlanRequest) -> Self {
        Self { request }
    }

    /// The plan, plus the CSV path when one was written
    pub fn execute(&self) -> Result<(StudyPlan, Option<PathBuf>)> {
        let req = &self.request;

        if !req.hours.is_finite() || req.hours <= 0.0 || req.hours > MAX_HOURS {
            bail!("Study hours must be between 0 and {MAX_HOURS}, got {}", req.hours);
        }

        let plan = generate_study_plan(&req.subject, req.hours, &req.scenario);
        tracing::info!(
            "Study plan for '{}': {} study sessions",
            plan.subject,
            plan.study_sessions().count(),
        );

        let written = match &req.csv {
            Some(target) => Some(export_plan_csv(&plan, target)?),
            None         => None,
        };

        Ok((plan, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request(hours: f64, csv: Option<PathBuf>) -> PlanRequest {
        PlanRequest {
            subject:  "Mathematics".into(),
            hours,
            scenario: "exam".into(),
            csv,
        }
    }

    #[test]
    fn test_plan_without_export() {
        let (plan, written) = PlanUseCase::new(request(3.0, None)).execute().unwrap();
        assert_eq!(plan.study_sessions().count(), 3);
        assert!(written.is_none());
    }

    #[test]
    fn test_plan_with_export() {
        let dir    = tempdir().unwrap();
        let target = dir.path().join("plan.csv");
        let (_, written) = PlanUseCase::new(request(1.0, Some(target.clone()))).execute().unwrap();
        assert_eq!(written, Some(target));
    }

    #[test]
    fn test_rejects_bad_hours() {
        assert!(PlanUseCase::new(request(0.0, None)).execute().is_err());
        assert!(PlanUseCase::new(request(-2.0, None)).execute().is_err());
        assert!(PlanUseCase::new(request(30.0, None)).execute().is_err());
        assert!(PlanUseCase::new(request(f64::NAN, None)).execute().is_err());
    }
}
