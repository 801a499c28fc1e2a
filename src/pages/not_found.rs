use leptos::prelude::*;
use leptos_router::components::A;

/// Router fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="screen">
			<h1>"Page not found"</h1>
			<p>"The page you were looking for does not exist."</p>
			<A href="/">"Back home"</A>
		</section>
	}
}
