use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::domain::entities::person::FilterState;
use crate::usecase::ports::people_api::PeopleApi;
use crate::usecase::ports::view::TableView;

/// Fetches the records matching a filter and hands them to the view.
///
/// Failures are logged and leave the view untouched. When stale discarding is
/// enabled, a response that arrives after a newer refresh was issued is
/// dropped instead of rendered.
#[derive(Clone)]
pub struct TableRefresher {
    api: Rc<dyn PeopleApi>,
    view: Rc<dyn TableView>,
    issued: Rc<Cell<u64>>,
    discard_stale: bool,
}

impl TableRefresher {
    pub fn new(api: Rc<dyn PeopleApi>, view: Rc<dyn TableView>) -> Self {
        Self {
            api,
            view,
            issued: Rc::new(Cell::new(0)),
            discard_stale: false,
        }
    }

    pub fn discarding_stale(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }

    /// Issues the request right away and returns the future that renders
    /// its outcome.
    pub fn refresh(&self, filter: &FilterState) -> LocalBoxFuture<'static, ()> {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);

        let api = self.api.clone();
        let view = self.view.clone();
        let issued = self.issued.clone();
        let discard_stale = self.discard_stale;
        let query = filter.active_query();

        Box::pin(async move {
            let result = match &query {
                Some(query) => {
                    tracing::debug!(text = %query.text, field = query.field.as_param(), "searching people");
                    api.search(query).await
                }
                None => {
                    tracing::debug!("loading all people");
                    api.list_all().await
                }
            };

            match result {
                Ok(people) => {
                    if discard_stale && ticket != issued.get() {
                        tracing::debug!(ticket, latest = issued.get(), "dropping stale response");
                        return;
                    }
                    view.render(&people);
                }
                Err(err) if query.is_some() => {
                    tracing::error!(error = %err, "search failed");
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to load people");
                }
            }
        })
    }
}
