use crate::api::{LeaveRecord, LeaveStatus};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Approved leave that started in `year`.
pub fn counts_toward_summary(record: &LeaveRecord, year: i32) -> bool {
    record.status == LeaveStatus::Approved && record.start_date.year() == year
}

/// Days taken per leave type, ordered by type name.
pub fn summarize_by_type(records: &[LeaveRecord], year: i32) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for record in records.iter().filter(|r| counts_toward_summary(r, year)) {
        *totals.entry(record.leave_type.clone()).or_insert(0.0) += record.days_taken;
    }
    totals
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLeaveSummary {
    pub employee_id: Option<i64>,
    pub employee_name: String,
    pub totals: BTreeMap<String, f64>,
}

impl EmployeeLeaveSummary {
    pub fn total_days(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// Days taken per employee and leave type, ordered by employee id.
pub fn summarize_by_employee(records: &[LeaveRecord], year: i32) -> Vec<EmployeeLeaveSummary> {
    let mut grouped: BTreeMap<Option<i64>, EmployeeLeaveSummary> = BTreeMap::new();
    for record in records.iter().filter(|r| counts_toward_summary(r, year)) {
        let employee_id = record.employee.as_ref().and_then(|link| link.id());
        let summary = grouped
            .entry(employee_id)
            .or_insert_with(|| EmployeeLeaveSummary {
                employee_id,
                employee_name: record.employee_name(),
                totals: BTreeMap::new(),
            });
        *summary
            .totals
            .entry(record.leave_type.clone())
            .or_insert(0.0) += record.days_taken;
    }
    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EmployeeLink, PersonRef};
    use chrono::NaiveDate;

    fn leave(
        employee: Option<(i64, &str, &str)>,
        kind: &str,
        start: (i32, u32, u32),
        days: f64,
        status: LeaveStatus,
    ) -> LeaveRecord {
        let start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        LeaveRecord {
            id: 0,
            employee: employee.map(|(id, first, last)| {
                EmployeeLink::Detail(PersonRef {
                    id: Some(id),
                    first_name: first.into(),
                    last_name: last.into(),
                })
            }),
            leave_type: kind.into(),
            start_date,
            end_date: start_date,
            days_taken: days,
            reason: None,
            status,
            applied_on: None,
            approved_on: None,
            approved_by: None,
        }
    }

    #[test]
    fn approved_sick_leaves_in_year_sum_by_type() {
        let records = vec![
            leave(None, "Sick", (2024, 3, 1), 2.0, LeaveStatus::Approved),
            leave(None, "Sick", (2024, 7, 9), 3.0, LeaveStatus::Approved),
        ];
        let summary = summarize_by_type(&records, 2024);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get("Sick"), Some(&5.0));
    }

    #[test]
    fn other_statuses_and_years_are_excluded() {
        let records = vec![
            leave(None, "Annual", (2024, 1, 5), 1.0, LeaveStatus::Pending),
            leave(None, "Annual", (2024, 1, 6), 1.0, LeaveStatus::Rejected),
            leave(None, "Annual", (2023, 12, 30), 4.0, LeaveStatus::Approved),
            leave(None, "Unpaid", (2024, 2, 1), 1.5, LeaveStatus::Approved),
        ];
        let summary = summarize_by_type(&records, 2024);
        assert_eq!(summary.into_iter().collect::<Vec<_>>(), vec![("Unpaid".to_string(), 1.5)]);
    }

    #[test]
    fn employee_summary_groups_by_employee_then_type() {
        let records = vec![
            leave(Some((9, "Zed", "Last")), "Sick", (2024, 1, 2), 1.0, LeaveStatus::Approved),
            leave(Some((2, "Amy", "First")), "Sick", (2024, 1, 2), 2.0, LeaveStatus::Approved),
            leave(Some((2, "Amy", "First")), "Annual", (2024, 4, 2), 3.0, LeaveStatus::Approved),
            leave(Some((2, "Amy", "First")), "Annual", (2024, 5, 2), 1.0, LeaveStatus::Approved),
        ];
        let summary = summarize_by_employee(&records, 2024);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].employee_id, Some(2));
        assert_eq!(summary[0].employee_name, "Amy First");
        assert_eq!(
            summary[0].totals.keys().cloned().collect::<Vec<_>>(),
            vec!["Annual".to_string(), "Sick".to_string()]
        );
        assert_eq!(summary[0].totals["Annual"], 4.0);
        assert_eq!(summary[0].total_days(), 6.0);
        assert_eq!(summary[1].employee_name, "Zed Last");
    }
}
