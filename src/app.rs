use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::domain::entities::person::SearchField;
use crate::infra::http::client::HttpPeopleApi;
use crate::platform::{PlatformConfirm, PlatformScheduler};
use crate::ui::state::app_state::AppState;
use crate::ui::state::table_state::TableRow;
use crate::usecase::ports::people_api::PeopleApi;
use crate::usecase::ports::view::TableView;
use crate::usecase::services::delete_service::DeleteController;
use crate::usecase::services::refresh_service::TableRefresher;
use crate::usecase::services::search_service::SearchController;

const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%; border: 1px solid #bbb;";
const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; cursor: pointer; user-select: none;";
const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";
const ACTION_STYLE: &str = "margin-right: 8px; cursor: pointer;";

#[derive(Clone)]
struct Controllers {
    search: Rc<RefCell<SearchController>>,
    delete: Rc<DeleteController>,
}

impl Controllers {
    fn build(config: &ClientConfig, state: AppState) -> Result<Self> {
        let api: Rc<dyn PeopleApi> = Rc::new(HttpPeopleApi::new(&config.base_url)?);
        let view: Rc<dyn TableView> = Rc::new(state.table);
        let refresher = TableRefresher::new(api.clone(), view.clone())
            .discarding_stale(config.discard_stale_responses);
        let search = Rc::new(RefCell::new(SearchController::new(
            refresher,
            Rc::new(state),
            Rc::new(PlatformScheduler),
            config.search_debounce,
        )));
        let delete = Rc::new(DeleteController::new(
            api,
            view,
            Rc::new(PlatformConfirm),
            search.clone(),
        ));
        Ok(Self { search, delete })
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<ClientConfig>();
    let state = AppState::new();
    let controllers = use_hook(|| {
        Controllers::build(&config, state).map_err(|err| {
            tracing::error!(error = %err, "failed to set up people table");
            format!("{err:#}")
        })
    });

    let initial = controllers.clone();
    use_future(move || {
        let initial = initial.clone();
        async move {
            if let Ok(controllers) = initial {
                let refresh = controllers.search.borrow_mut().refresh_now();
                refresh.await;
            }
        }
    });

    let controllers = match controllers {
        Ok(controllers) => controllers,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to start the people table: {err}" }
                }
            };
        }
    };

    let AppState {
        mut table,
        mut filter_text,
        mut search_field,
    } = state;
    let headers = table.read().headers().to_vec();
    let rows = table.read().rows().to_vec();
    let search = controllers.search.clone();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                input {
                    id: "globalFilter",
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{filter_text}",
                    oninput: move |event| {
                        filter_text.set(event.value());
                        search.borrow_mut().on_search_input();
                    },
                }
                for field in SearchField::ALL {
                    label {
                        key: "{field.as_param()}",
                        style: "display: inline-flex; gap: 4px; align-items: center;",
                        input {
                            r#type: "radio",
                            name: "searchField",
                            value: field.as_param(),
                            checked: search_field() == field,
                            onchange: move |event| {
                                if let Some(field) = SearchField::from_param(&event.value()) {
                                    search_field.set(field);
                                }
                            },
                        }
                        "{field.as_param()}"
                    }
                }
            }

            table { style: TABLE_STYLE,
                thead {
                    tr {
                        for (idx, header) in headers.into_iter().enumerate() {
                            th {
                                key: "{idx}",
                                style: HEADER_CELL_STYLE,
                                onclick: move |_| table.write().sort_by_column(idx),
                                "{header.label}"
                            }
                        }
                    }
                }
                tbody {
                    {rows.into_iter().map(|row| match row {
                        TableRow::Person(person) => {
                            let id = person.id;
                            let row_key = person.key.value();
                            let cells = person.cells;
                            let edit_url = config.edit_url(id);
                            let delete = controllers.delete.clone();
                            rsx!(
                                tr {
                                    key: "{row_key}",
                                    "data-id": "{id}",
                                    for (idx, cell) in cells.into_iter().enumerate() {
                                        td {
                                            key: "{idx}",
                                            style: CELL_STYLE,
                                            dangerous_inner_html: "{cell.html}",
                                        }
                                    }
                                    td { style: CELL_STYLE,
                                        a {
                                            class: "dlt btn",
                                            style: ACTION_STYLE,
                                            onclick: move |_| {
                                                let delete = delete.clone();
                                                async move {
                                                    delete.on_delete_requested(id).await;
                                                }
                                            },
                                            "Delete"
                                        }
                                        a { class: "dlt btn", style: ACTION_STYLE, href: "{edit_url}", "Edit" }
                                    }
                                }
                            )
                        }
                        TableRow::Placeholder { colspan, message } => rsx!(
                            PlaceholderRow { key: "{message}", colspan, message }
                        ),
                    })}
                }
            }
        }
    }
}

#[component]
fn PlaceholderRow(colspan: usize, message: String) -> Element {
    rsx! {
        tr {
            td {
                style: "{CELL_STYLE} text-align: center;",
                colspan: "{colspan}",
                "{message}"
            }
        }
    }
}
