use dioxus::prelude::*;

use crate::domain::entities::person::{FilterState, PersonId, PersonRecord, SearchField};
use crate::ui::state::table_state::PeopleTable;
use crate::usecase::ports::view::{FilterSource, TableView};

#[derive(Clone, Copy)]
pub struct AppState {
    pub table: Signal<PeopleTable>,
    pub filter_text: Signal<String>,
    pub search_field: Signal<SearchField>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: use_signal(PeopleTable::new),
            filter_text: use_signal(String::new),
            search_field: use_signal(SearchField::default),
        }
    }
}

impl TableView for Signal<PeopleTable> {
    fn render(&self, records: &[PersonRecord]) {
        let mut table = *self;
        table.write().render(records);
    }

    fn remove_row(&self, id: PersonId) -> bool {
        let mut table = *self;
        let removed = table.write().remove_row(id);
        removed
    }
}

impl FilterSource for AppState {
    fn current_filter(&self) -> FilterState {
        FilterState::new(
            String::clone(&self.filter_text.peek()),
            *self.search_field.peek(),
        )
    }
}
