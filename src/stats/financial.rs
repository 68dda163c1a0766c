//! Rollup financiero por subcontratista
//!
//! Lo pagado suma el tramo del 90% cuando el anticipo está pagado y el
//! tramo del 10% cuando el saldo está pagado. Un conjunto vacío de
//! misiones produce un resultado todo-ceros, no un error.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::mission::{Mission, MissionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcontractorFinancials {
    pub total_missions: i64,
    pub ongoing_missions: i64,
    pub completed_missions: i64,
    pub cancelled_missions: i64,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
}

pub fn financial_rollup(missions: &[Mission]) -> SubcontractorFinancials {
    let mut rollup = SubcontractorFinancials {
        total_missions: missions.len() as i64,
        ongoing_missions: 0,
        completed_missions: 0,
        cancelled_missions: 0,
        total_amount: Decimal::ZERO,
        paid_amount: Decimal::ZERO,
        remaining_amount: Decimal::ZERO,
    };

    for mission in missions {
        match mission.status {
            MissionStatus::Ongoing => rollup.ongoing_missions += 1,
            MissionStatus::Completed => rollup.completed_missions += 1,
            MissionStatus::Cancelled => rollup.cancelled_missions += 1,
        }
        rollup.total_amount += mission.amount_total;
        if mission.advance_paid {
            rollup.paid_amount += mission.amount_90_percent;
        }
        if mission.balance_paid {
            rollup.paid_amount += mission.amount_10_percent;
        }
    }

    rollup.remaining_amount = rollup.total_amount - rollup.paid_amount;
    rollup
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn mission(
        total: i64,
        tranche_90: i64,
        tranche_10: i64,
        advance: bool,
        balance: bool,
    ) -> Mission {
        Mission {
            id: Uuid::new_v4(),
            subcontractor_id: Uuid::new_v4(),
            mission_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            origin_id: Uuid::new_v4(),
            destination_id: Uuid::new_v4(),
            container_type: "20ft".to_string(),
            quantity: 1,
            amount_total: Decimal::from(total),
            amount_90_percent: Decimal::from(tranche_90),
            amount_10_percent: Decimal::from(tranche_10),
            advance_paid: advance,
            balance_paid: balance,
            advance_paid_at: None,
            balance_paid_at: None,
            status: MissionStatus::Ongoing,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rollup_two_missions() {
        let missions = vec![
            mission(1000, 900, 100, true, false),
            mission(500, 450, 50, false, false),
        ];
        let rollup = financial_rollup(&missions);
        assert_eq!(rollup.total_missions, 2);
        assert_eq!(rollup.total_amount, Decimal::from(1500));
        assert_eq!(rollup.paid_amount, Decimal::from(900));
        assert_eq!(rollup.remaining_amount, Decimal::from(600));
    }

    #[test]
    fn test_rollup_empty_is_all_zeros() {
        let rollup = financial_rollup(&[]);
        assert_eq!(rollup.total_missions, 0);
        assert_eq!(rollup.ongoing_missions, 0);
        assert_eq!(rollup.completed_missions, 0);
        assert_eq!(rollup.cancelled_missions, 0);
        assert_eq!(rollup.total_amount, Decimal::ZERO);
        assert_eq!(rollup.paid_amount, Decimal::ZERO);
        assert_eq!(rollup.remaining_amount, Decimal::ZERO);
    }

    #[test]
    fn test_rollup_fully_paid() {
        let missions = vec![mission(1000, 900, 100, true, true)];
        let rollup = financial_rollup(&missions);
        assert_eq!(rollup.paid_amount, Decimal::from(1000));
        assert_eq!(rollup.remaining_amount, Decimal::ZERO);
    }

    #[test]
    fn test_rollup_counts_by_status() {
        let mut completed = mission(100, 90, 10, true, true);
        completed.status = MissionStatus::Completed;
        let mut cancelled = mission(200, 180, 20, false, false);
        cancelled.status = MissionStatus::Cancelled;
        let missions = vec![mission(300, 270, 30, false, false), completed, cancelled];

        let rollup = financial_rollup(&missions);
        assert_eq!(rollup.ongoing_missions, 1);
        assert_eq!(rollup.completed_missions, 1);
        assert_eq!(rollup.cancelled_missions, 1);
    }
}
