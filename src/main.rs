// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{run, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap(),
    };

    run(flags)
}
