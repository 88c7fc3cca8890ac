use contracts::shared::navigation::Navigate;
use leptos::prelude::*;
use web_sys::window;

/// Browser-history navigation with the current path mirrored in a signal,
/// so route-dependent views re-render on `navigate` and on back/forward.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub path: RwSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_path()),
        }
    }

    /// Keep `path` in sync with back/forward buttons
    pub fn init_history_integration(&self) {
        let path = self.path;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            path.set(current_path());
        });
    }

    pub fn push(&self, target: &str) {
        log::debug!("navigate: '{}'", target);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(target));
            }
        }
        self.path.set(target.to_string());
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigate for Navigator {
    fn navigate(&self, path: &str) {
        self.push(path);
    }
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not found")
}
