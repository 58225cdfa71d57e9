use std::net::IpAddr;
use std::time::Duration;

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// Section header: ──────⟦ RESOLVING INSTANCE ADDRESS ⟧──────
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}",
        format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.bright_green(),
            "─".repeat(right)
        )
        .bright_black()
    );
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn resolved(addr: IpAddr, total_time: Duration) {
    let addr: ColoredString = addr.to_string().bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    fat_separator();
    println!("Instance reachable at {addr} (resolved in {total_time})");
}

/// Lists the candidates that were probed before a failure, in probe
/// order, for diagnosis.
pub fn attempted_list(attempted: &[IpAddr]) {
    if attempted.is_empty() {
        println!("{}", "No candidate was probed.".bright_black());
        return;
    }

    println!("Candidates probed, in order:");
    for (idx, addr) in attempted.iter().enumerate() {
        let last: bool = idx + 1 == attempted.len();
        let branch: ColoredString = if last {
            "└─".bright_black()
        } else {
            "├─".bright_black()
        };
        println!(" {} {}", branch, addr.to_string().red());
    }
}
