use async_trait::async_trait;

#[async_trait(?Send)]
pub trait ConfirmPrompt {
    /// Asks the user a yes/no question. Anything but an explicit yes is `false`.
    async fn confirm(&self, message: &str) -> bool;
}
