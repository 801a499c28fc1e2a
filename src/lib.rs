//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod pages;

// Top-Level pages
use crate::pages::constellation::ConstellationPage;
use crate::pages::habits::HabitsPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the three tabs and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Habit Constellation" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<main class="app-main">
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/habits") view=HabitsPage />
					<Route path=path!("/constellation") view=ConstellationPage />
				</Routes>
			</main>
			<nav class="tab-bar">
				<A href="/">"Home"</A>
				<A href="/habits">"Habits"</A>
				<A href="/constellation">"Constellation"</A>
			</nav>
		</Router>
	}
}
