//! Thin wrappers over browser-only APIs.

/// Show a blocking `window.alert`. Outside the browser the message is logged.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Current calendar year, when a browser clock is available.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
