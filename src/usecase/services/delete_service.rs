use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::entities::person::PersonId;
use crate::usecase::ports::people_api::PeopleApi;
use crate::usecase::ports::prompt::ConfirmPrompt;
use crate::usecase::ports::view::TableView;
use crate::usecase::services::search_service::SearchController;

pub const CONFIRM_MESSAGE: &str = "Are you sure?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

pub struct DeleteController {
    api: Rc<dyn PeopleApi>,
    view: Rc<dyn TableView>,
    prompt: Rc<dyn ConfirmPrompt>,
    search: Rc<RefCell<SearchController>>,
}

impl DeleteController {
    pub fn new(
        api: Rc<dyn PeopleApi>,
        view: Rc<dyn TableView>,
        prompt: Rc<dyn ConfirmPrompt>,
        search: Rc<RefCell<SearchController>>,
    ) -> Self {
        Self {
            api,
            view,
            prompt,
            search,
        }
    }

    /// Confirms, deletes, drops the row locally and then reloads the table
    /// with whatever filter is active. The reload starts only after the
    /// server acknowledged the delete.
    pub async fn on_delete_requested(&self, id: PersonId) -> DeleteOutcome {
        if !self.prompt.confirm(CONFIRM_MESSAGE).await {
            tracing::debug!(%id, "delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_by_id(id).await {
            Ok(body) => {
                if !self.view.remove_row(id) {
                    tracing::debug!(%id, "deleted person had no rendered row");
                }
                let refresh = self.search.borrow_mut().refresh_now();
                refresh.await;
                tracing::info!(%id, response = %body, "person deleted");
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to delete person");
                DeleteOutcome::Failed
            }
        }
    }
}
