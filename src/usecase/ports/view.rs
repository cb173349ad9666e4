use crate::domain::entities::person::{FilterState, PersonId, PersonRecord};

/// Where fetched records end up.
pub trait TableView {
    fn render(&self, records: &[PersonRecord]);

    fn remove_row(&self, id: PersonId) -> bool;
}

/// Live view of the search controls, read fresh on every operation.
pub trait FilterSource {
    fn current_filter(&self) -> FilterState;
}
