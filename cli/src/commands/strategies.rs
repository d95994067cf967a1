use colored::*;
use zonr_core::strategy::{self, ResolveStrategy};

use crate::terminal::{colors, print};

pub fn strategies() {
    print::subheader("URL targets");
    print_strategies(&strategy::builtin_uri_strategies());

    print::subheader("address targets");
    print_strategies(&strategy::builtin_address_strategies());
}

fn print_strategies<T>(strategies: &[Box<dyn ResolveStrategy<T>>]) {
    print::set_key_width(strategies.iter().map(|s| s.name().len()).max().unwrap_or(0));
    for strategy in strategies {
        print::aligned_line(
            &format!("{}:", strategy.name()),
            strategy.description().color(colors::TEXT_DEFAULT),
        );
    }
}
