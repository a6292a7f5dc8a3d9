// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        url: args.opt_value_from_str("--url").unwrap_or_default(),
        page: args.opt_value_from_str("--page").unwrap_or_default(),
        limit: args.opt_value_from_str("--limit").unwrap_or_default(),
    };

    app::run(flags)
}
