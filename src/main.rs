//! Trunk entry point.

use leptos::prelude::*;
use planet_rendezvous::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
