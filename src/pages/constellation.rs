use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::api;
use crate::components::constellation::{Constellation, ConstellationCanvas};

/// The constellation tab. Fetches today's snapshot once per visit; a failed
/// fetch degrades to an empty snapshot, which renders the same empty state
/// as a day with no completions.
#[component]
pub fn ConstellationPage() -> impl IntoView {
	let (snapshot, set_snapshot) = signal(Option::<Constellation>::None);
	let canvas_data = Signal::derive(move || snapshot.get().unwrap_or_default());

	spawn_local(async move {
		let data = api::get_today_constellation().await.unwrap_or_else(|err| {
			warn!("constellation fetch failed: {err}");
			Constellation::default()
		});
		// A no-op if the page was left before the fetch landed
		set_snapshot.set(Some(data));
	});

	view! {
		<section class="screen constellation-screen">
			<h1>"Today's Constellation"</h1>
			{move || match snapshot.get() {
				None => view! { <p class="loading">"Loading..."</p> }.into_any(),
				Some(data) if data.nodes.is_empty() => {
					view! {
						<p class="empty">"Complete some habits to form your constellation!"</p>
					}
					.into_any()
				}
				Some(_) => {
					view! {
						<div class="constellation-canvas-wrap">
							<ConstellationCanvas data=canvas_data />
						</div>
					}
					.into_any()
				}
			}}
		</section>
	}
}
