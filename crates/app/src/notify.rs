use shared_ui::{ToastOptions, Toasts};

/// Report a simulated action as done. These actions cannot fail, so there is
/// no error counterpart.
pub fn success(toast: Toasts, message: impl Into<String>) {
    let message = message.into();
    tracing::info!(%message, "action reported");
    toast.success(message, ToastOptions::new());
}

/// Acknowledge a click on a feature that only exists as a placeholder.
pub fn placeholder(toast: Toasts, action: &str) {
    let message = placeholder_message(action);
    tracing::debug!(action, "placeholder action");
    toast.info(message, ToastOptions::new());
}

fn placeholder_message(action: &str) -> String {
    format!("{action} clicked")
}

/// Confirmation shown after the contact form is submitted.
pub const CONTACT_SENT: &str =
    "Message sent successfully! Our team will contact you within 24 hours.";
