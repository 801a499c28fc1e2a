//! CSR entry point: mounts the app to the document body.

use habit_constellation::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
