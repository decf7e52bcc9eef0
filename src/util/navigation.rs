//! Hard-navigation seam.
//!
//! Client-side route changes go through `leptos_router`; this covers the
//! full-page redirects used when a session ends and the path checks that keep
//! those redirects from looping on the sign-in page.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::Arc;

pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

pub trait Navigator {
    /// Path of the view currently rendered, without query or fragment.
    fn current_path(&self) -> String;
    /// Leave the current view with a full page load.
    ///
    /// Returns `false` when the navigation could not be started.
    fn hard_redirect(&self, path: &str) -> bool;
}

/// Navigator bound to `window.location`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn hard_redirect(&self, path: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.location().set_href(path) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("hard redirect to {path} failed: {e:?}");
                    false
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("hard redirect to {path} skipped outside the browser");
            false
        }
    }
}

/// Compare two paths ignoring a trailing slash.
pub fn same_path(a: &str, b: &str) -> bool {
    fn normalize(path: &str) -> &str {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
    normalize(a) == normalize(b)
}
