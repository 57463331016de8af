mod args;
mod menu;
#[cfg(test)]
mod tests;

pub use args::Cli;
pub use menu::{print_banner, print_load_summary, run_menu};
