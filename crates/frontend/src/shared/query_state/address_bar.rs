use wasm_bindgen::JsValue;

/// The part of the browser location the filter state lives in.
pub trait AddressBar {
    /// Current query string, without the leading `?`.
    fn search(&self) -> String;

    /// Replaces the query string of the current history entry.
    /// Never pushes a new entry.
    fn replace_search(&mut self, search: &str);
}

/// `window.location` / `window.history` of the running page
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAddressBar;

impl AddressBar for BrowserAddressBar {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace_search(&mut self, search: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let new_url = if search.is_empty() {
            format!("{}{}", pathname, hash)
        } else {
            format!("{}?{}{}", pathname, search, hash)
        };

        match window.history() {
            Ok(history) => {
                if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("replaceState failed for {}: {:?}", new_url, err);
                }
            }
            Err(err) => log::warn!("history is not available: {:?}", err),
        }
    }
}

/// In-memory address bar; records every replacement.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBar {
    search: String,
    replacements: Vec<String>,
}

impl MemoryAddressBar {
    pub fn new(search: &str) -> Self {
        Self {
            search: search.trim_start_matches('?').to_string(),
            replacements: Vec::new(),
        }
    }

    /// Query strings written so far, oldest first.
    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

impl AddressBar for MemoryAddressBar {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn replace_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.replacements.push(search.to_string());
    }
}
