#[cfg(all(feature = "desktop", not(feature = "web")))]
pub mod desktop;
#[cfg(feature = "web")]
pub mod web;

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub use desktop::{DesktopConfirm as PlatformConfirm, DesktopScheduler as PlatformScheduler};
#[cfg(feature = "web")]
pub use web::{BrowserConfirm as PlatformConfirm, WebScheduler as PlatformScheduler};
