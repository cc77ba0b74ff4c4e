#[cfg(all(unix, not(target_os = "macos")))]
pub mod linux;
#[cfg(target_os = "windows")]
pub mod windows;

use std::sync::Arc;

use tracing::info;

use crate::config::{ClientConfig, PresenterKind};
use crate::notify::{LogPresenter, Presenter};

/// Pick the presenter for the current platform and configuration.
pub fn detect(cfg: &ClientConfig) -> Arc<dyn Presenter> {
    match cfg.presenter {
        PresenterKind::Log => {
            info!("presenter selected: log");
            Arc::new(LogPresenter::new())
        }
        PresenterKind::Auto if !desktop_available() => {
            info!("no desktop session detected; presenter selected: log");
            Arc::new(LogPresenter::new())
        }
        PresenterKind::Auto | PresenterKind::Desktop => desktop(cfg),
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn desktop(cfg: &ClientConfig) -> Arc<dyn Presenter> {
    info!("presenter selected: freedesktop notifications");
    Arc::new(linux::LinuxPlatform::new(cfg))
}

#[cfg(target_os = "windows")]
fn desktop(_cfg: &ClientConfig) -> Arc<dyn Presenter> {
    info!("presenter selected: windows toasts");
    Arc::new(windows::WindowsPlatform::new())
}

#[cfg(not(any(target_os = "windows", all(unix, not(target_os = "macos")))))]
fn desktop(_cfg: &ClientConfig) -> Arc<dyn Presenter> {
    info!("no desktop backend for this platform; presenter selected: log");
    Arc::new(LogPresenter::new())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn desktop_available() -> bool {
    linux::session_bus_available()
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn desktop_available() -> bool {
    true
}
