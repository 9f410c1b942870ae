//! Blocking notifications shown with the browser's `alert` dialog

/// Show a blocking alert. Falls back to the log when there is no window.
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::error!("No window to show alert: {}", message),
    }
}
