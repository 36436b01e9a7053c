use store::ThemePreference;

/// Set `data-theme` on the document root. `System` removes the attribute so
/// the stylesheet's `prefers-color-scheme` rules apply.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = match theme {
        ThemePreference::System => root.remove_attribute("data-theme"),
        other => root.set_attribute("data-theme", other.as_str()),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to apply theme: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: ThemePreference) {}
