use std::cmp::Reverse;
use std::collections::HashMap;

use crate::domain::entities::person::{PersonId, PersonRecord};
use crate::domain::markup::escape;
use crate::domain::sort::{SortDirection, SortKey, SortState};

pub const BASE_HEADERS: [&str; 6] = ["Id", "Name", "Surname", "Email", "Age", "Actions"];
pub const NO_RESULTS_MESSAGE: &str = "No results found";
const ACTIONS_TEXT: &str = "Delete Edit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(u64);

impl RowKey {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub html: String,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self {
            html: text.clone(),
            text,
        }
    }

    fn escaped(text: &str) -> Self {
        Self {
            text: text.to_string(),
            html: escape(Some(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub key: RowKey,
    pub id: PersonId,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Person(PersonRow),
    Placeholder { colspan: usize, message: String },
}

impl TableRow {
    /// Visible text of the cell at `column`, as a reader of the page sees it.
    pub fn cell_text(&self, column: usize) -> &str {
        match self {
            TableRow::Person(row) => match row.cells.get(column) {
                Some(cell) => cell.text.as_str(),
                None if column == row.cells.len() => ACTIONS_TEXT,
                None => "",
            },
            TableRow::Placeholder { message, .. } if column == 0 => message.as_str(),
            TableRow::Placeholder { .. } => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<TableRow>,
    index: HashMap<PersonId, RowKey>,
}

impl TableBody {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn row_key(&self, id: PersonId) -> Option<RowKey> {
        self.index.get(&id).copied()
    }

    #[cfg(test)]
    pub fn person_ids(&self) -> Vec<PersonId> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Person(person) => Some(person.id),
                TableRow::Placeholder { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub base: String,
    pub label: String,
}

/// The people table: header labels, the owned body and the per-column sort
/// memory. A table without a body has not been mounted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleTable {
    headers: Vec<ColumnHeader>,
    body: Option<TableBody>,
    sort: SortState,
    next_key: u64,
}

impl Default for PeopleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleTable {
    pub fn new() -> Self {
        Self {
            body: Some(TableBody::default()),
            ..Self::unmounted()
        }
    }

    pub fn unmounted() -> Self {
        Self {
            headers: BASE_HEADERS
                .iter()
                .map(|base| ColumnHeader {
                    base: base.to_string(),
                    label: base.to_string(),
                })
                .collect(),
            body: None,
            sort: SortState::default(),
            next_key: 0,
        }
    }

    pub fn headers(&self) -> &[ColumnHeader] {
        &self.headers
    }

    #[cfg(test)]
    pub fn body(&self) -> Option<&TableBody> {
        self.body.as_ref()
    }

    pub fn rows(&self) -> &[TableRow] {
        self.body.as_ref().map(TableBody::rows).unwrap_or(&[])
    }

    /// Replaces every body row with one row per record, in the given order.
    pub fn render(&mut self, records: &[PersonRecord]) {
        let Some(body) = self.body.as_mut() else {
            tracing::error!("table body not found, skipping render");
            return;
        };

        body.rows.clear();
        body.index.clear();

        if records.is_empty() {
            body.rows.push(TableRow::Placeholder {
                colspan: self.headers.len(),
                message: NO_RESULTS_MESSAGE.to_string(),
            });
            return;
        }

        for record in records {
            let key = RowKey(self.next_key);
            self.next_key += 1;
            body.index.insert(record.id, key);
            body.rows.push(TableRow::Person(PersonRow {
                key,
                id: record.id,
                cells: vec![
                    Cell::plain(record.id.to_string()),
                    Cell::escaped(&record.name),
                    Cell::escaped(&record.surname),
                    Cell::escaped(&record.email),
                    Cell::plain(record.age.map(|age| age.to_string()).unwrap_or_default()),
                ],
            }));
        }
    }

    /// Drops the row bound to `id`. Returns whether such a row was rendered.
    pub fn remove_row(&mut self, id: PersonId) -> bool {
        let Some(body) = self.body.as_mut() else {
            tracing::error!(%id, "table body not found, cannot remove row");
            return false;
        };
        let Some(key) = body.index.remove(&id) else {
            return false;
        };
        body.rows
            .retain(|row| !matches!(row, TableRow::Person(person) if person.key == key));
        true
    }

    /// Reorders the rendered rows by `column`, then relabels the headers so
    /// only the sorted column carries the indicator for its next click.
    pub fn sort_by_column(&mut self, column: usize) {
        if column >= self.headers.len() {
            tracing::warn!(column, "sort requested for unknown column");
            return;
        }

        let (direction, next) = self.sort.advance(column);

        if let Some(body) = self.body.as_mut() {
            match direction {
                SortDirection::Asc => body
                    .rows
                    .sort_by_cached_key(|row| SortKey::of(row.cell_text(column))),
                SortDirection::Desc => body
                    .rows
                    .sort_by_cached_key(|row| Reverse(SortKey::of(row.cell_text(column)))),
            }
        }

        for header in &mut self.headers {
            header.label = header.base.clone();
        }
        let header = &mut self.headers[column];
        header.label.push_str(next.indicator());

        tracing::debug!(column, ?direction, "sorted table");
    }
}
