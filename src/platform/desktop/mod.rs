use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use futures::future::LocalBoxFuture;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::usecase::ports::prompt::ConfirmPrompt;
use crate::usecase::ports::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopScheduler;

impl Scheduler for DesktopScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        dioxus::prelude::spawn(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopConfirm;

#[async_trait(?Send)]
impl ConfirmPrompt for DesktopConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Delete person")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        answer == MessageDialogResult::Yes
    }
}

const WEBVIEW_SUBDIR: &str = "webview";

/// Picks the webview profile directory and creates it if needed.
///
/// `configured` wins when set. Otherwise the profile lives under the user's
/// local data directory for this app.
pub fn webview_data_dir(configured: Option<&Path>) -> Result<PathBuf> {
    let dir = match configured {
        Some(dir) => dir.to_path_buf(),
        None => ProjectDirs::from("com", "example", "people-table")
            .map(|dirs| dirs.data_local_dir().join(WEBVIEW_SUBDIR))
            .ok_or_else(|| anyhow!("no home directory for the webview profile"))?,
    };

    if !dir.is_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("cannot prepare webview profile at {}", dir.display()))?;
    }
    Ok(dir)
}
