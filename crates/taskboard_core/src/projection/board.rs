//! Kanban board projection.

use crate::model::record::{Record, Status};

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    pub status: Status,
    pub records: Vec<&'a Record>,
}

/// Columns for every status in [`Status::ALL`] order, empty ones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjection<'a> {
    pub columns: Vec<BoardColumn<'a>>,
}

impl<'a> BoardProjection<'a> {
    pub fn column(&self, status: Status) -> &BoardColumn<'a> {
        &self.columns[status.index()]
    }

    /// Number of records across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.records.len()).sum()
    }
}

/// Partitions `records` by status, keeping input order inside each column.
pub fn project_board<'a, I>(records: I) -> BoardProjection<'a>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut columns: Vec<BoardColumn<'a>> = Status::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            records: Vec::new(),
        })
        .collect();

    for record in records {
        columns[record.status.index()].records.push(record);
    }

    BoardProjection { columns }
}
