// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use portfolio_website::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
