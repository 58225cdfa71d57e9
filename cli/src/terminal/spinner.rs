use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Short-lived spinner shown while a command waits on the network.
pub fn start(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .expect("spinner template is static")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);

    pb.set_style(style);
    pb.enable_steady_tick(TICK_INTERVAL);
    pb.set_message(msg.to_string());
    pb
}
