//! Browser-side helpers for the analyzer component.
//!
//! - **Notifications**: `notify` raises a blocking alert for errors that abort
//!   an action; `show_toast` shows a transient message that removes itself.
//! - **Formatting**: file size labels for the staged file.
//! - **Time**: ISO-8601 timestamps for the generated report.

use num_format::{Locale, ToFormattedString};

const TOAST_MILLIS: u32 = 3000;

/// Blocking notification, used for validation and request errors.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            gloo_console::error!(format!("alert failed: {}", message));
        }
    }
}

/// Non-blocking message, styled by `.toast` in `styles.css`, removed after
/// three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        gloo_console::error!(format!("could not show toast: {}", message));
        return;
    }
    gloo_timers::callback::Timeout::new(TOAST_MILLIS, move || toast.remove()).forget();
}

/// Current time as ISO-8601, e.g. `2024-05-01T10:00:00.000Z`.
pub fn iso_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Size label for the staged file: bytes below 1 KiB, otherwise whole KiB
/// with thousands separators.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{} KB", (bytes / 1024).to_formatted_string(&Locale::en))
    }
}
