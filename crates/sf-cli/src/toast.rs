//! Toast sink: pending notifications are printed to stderr

use console::style;
use sf_notifications::{Level, Notification, ToastQueue};

pub fn flush(queue: &ToastQueue) {
    for notification in queue.drain() {
        eprintln!("{}", format_toast(&notification));
    }
}

fn format_toast(notification: &Notification) -> String {
    let marker = match notification.level {
        Level::Success => style("✔").for_stderr().green(),
        Level::Info => style("ℹ").for_stderr().cyan(),
        Level::Warning => style("!").for_stderr().yellow(),
        Level::Error => style("✖").for_stderr().red(),
    };
    format!(
        "{} {}: {}",
        marker,
        style(&notification.title).for_stderr().bold(),
        notification.description
    )
}
