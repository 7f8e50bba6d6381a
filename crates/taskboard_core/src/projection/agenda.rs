//! "Upcoming events" side panel.

use crate::model::record::Record;
use chrono::NaiveDate;

/// Default number of agenda entries.
pub const DEFAULT_AGENDA_LIMIT: usize = 5;

/// Scheduled records on or after `today`, earliest first, at most `limit`.
pub fn upcoming_agenda<'a, I>(records: I, today: NaiveDate, limit: usize) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut dated: Vec<(NaiveDate, &'a Record)> = records
        .into_iter()
        .filter_map(|record| record.scheduled_on().map(|date| (date, record)))
        .filter(|(date, _)| *date >= today)
        .collect();
    dated.sort_by_key(|(date, _)| *date);
    dated.into_iter().take(limit).map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::upcoming_agenda;
    use crate::model::record::Record;
    use chrono::NaiveDate;

    #[test]
    fn agenda_sorts_by_date_and_caps() {
        let records = vec![
            Record::new("late", "late").with_due_date("2025-03-25"),
            Record::new("past", "past").with_due_date("2025-03-01"),
            Record::new("today", "today").with_due_date("2025-03-12"),
            Record::new("soon", "soon").with_due_date("2025-03-15"),
            Record::new("none", "none"),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

        let agenda = upcoming_agenda(&records, today, 2);
        let ids: Vec<&str> = agenda.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "soon"]);
    }
}
