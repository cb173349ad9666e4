use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};

use crate::usecase::ports::scheduler::Scheduler;
use crate::usecase::ports::view::FilterSource;
use crate::usecase::services::refresh_service::TableRefresher;

/// Turns keystrokes in the filter box into at most one search per pause in
/// typing.
///
/// The pending handle only guards the quiet period. Once a search request has
/// been sent it runs to completion even if the user keeps typing.
pub struct SearchController {
    refresher: TableRefresher,
    filter: Rc<dyn FilterSource>,
    scheduler: Rc<dyn Scheduler>,
    debounce: Duration,
    pending: Option<AbortHandle>,
}

impl SearchController {
    pub fn new(
        refresher: TableRefresher,
        filter: Rc<dyn FilterSource>,
        scheduler: Rc<dyn Scheduler>,
        debounce: Duration,
    ) -> Self {
        Self {
            refresher,
            filter,
            scheduler,
            debounce,
            pending: None,
        }
    }

    pub fn on_search_input(&mut self) {
        self.cancel_pending();

        let filter = self.filter.current_filter();
        if filter.active_query().is_none() {
            self.scheduler.spawn(self.refresher.refresh(&filter));
            return;
        }

        let (handle, registration) = AbortHandle::new_pair();
        let quiet_period = Abortable::new(self.scheduler.sleep(self.debounce), registration);
        let refresher = self.refresher.clone();
        self.scheduler.spawn(Box::pin(async move {
            if quiet_period.await.is_err() {
                return;
            }
            refresher.refresh(&filter).await;
        }));
        self.pending = Some(handle);
    }

    /// Drops any pending search and refreshes for the current filter without
    /// waiting for a quiet period.
    pub fn refresh_now(&mut self) -> LocalBoxFuture<'static, ()> {
        self.cancel_pending();
        let filter = self.filter.current_filter();
        self.refresher.refresh(&filter)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
