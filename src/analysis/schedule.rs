//! Expansion of a treatment plan into dated maintenance tasks.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::models::{MaintenanceTask, TreatmentPlan};
use super::parser::AnalysisError;

/// Plans cover at most thirty days starting today.
pub const PLAN_DAYS: i64 = 30;

/// Turn every task in the daily plan into a dated, uncompleted task.
pub fn schedule_tasks(
    plan: &TreatmentPlan,
    pool_id: Uuid,
    today: NaiveDate,
) -> Result<Vec<MaintenanceTask>, AnalysisError> {
    let mut tasks = Vec::new();
    for day in &plan.maintenance_plan_daily {
        if !(0..PLAN_DAYS).contains(&day.day_index) {
            return Err(AnalysisError::DayIndexOutOfRange(day.day_index));
        }
        let scheduled_date = today + Duration::days(day.day_index);
        tasks.extend(day.tasks.iter().map(|task| MaintenanceTask {
            pool_id,
            scheduled_date,
            action: task.action.clone(),
            note: task.note.clone(),
            is_completed: false,
        }));
    }
    Ok(tasks)
}
