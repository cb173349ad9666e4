use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use wasm_bindgen_futures::JsFuture;

use crate::usecase::ports::prompt::ConfirmPrompt;
use crate::usecase::ports::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        dioxus::prelude::spawn(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let timer = js_sys::Promise::new(&mut |resolve, _reject| {
            let Some(window) = web_sys::window() else {
                tracing::error!("window not available, timer will never fire");
                return;
            };
            if let Err(err) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            {
                tracing::error!(?err, "failed to schedule timer");
            }
        });
        Box::pin(async move {
            let _ = JsFuture::from(timer).await;
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl ConfirmPrompt for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::error!("window not available, treating confirm as declined");
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }
}

/// Origin of the page the app was served from, used as the API base url.
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}
