use colored::*;
use std::env;

const LOGO: [&str; 6] = [
    "██████╗  ██████╗ ██╗   ██╗███╗   ██╗████████╗██╗   ██╗",
    "██╔══██╗██╔═══██╗██║   ██║████╗  ██║╚══██╔══╝╚██╗ ██╔╝",
    "██████╔╝██║   ██║██║   ██║██╔██╗ ██║   ██║    ╚████╔╝ ",
    "██╔══██╗██║   ██║██║   ██║██║╚██╗██║   ██║     ╚██╔╝  ",
    "██████╔╝╚██████╔╝╚██████╔╝██║ ╚████║   ██║      ██║   ",
    "╚═════╝  ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝   ╚═╝      ╚═╝   ",
];

/// Print the startup banner unless NO_BANNER is set.
pub fn display_banner() {
    if env::var("NO_BANNER").is_ok() {
        return;
    }

    println!();
    for (index, line) in LOGO.iter().enumerate() {
        if index % 2 == 0 {
            println!("{}", line.blue());
        } else {
            println!("{}", line.bright_black());
        }
    }
    println!(
        "{}",
        format!("  bounty relay v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!();
}
