use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use log::warn;

use crate::api::{self, Insight};
use crate::components::InsightCard;

/// The home tab: today's progress, quick links, and recent insights.
/// Failed dashboard fetches keep their previous values and log a warning.
#[component]
pub fn Home() -> impl IntoView {
	let (habit_count, set_habit_count) = signal(0usize);
	let (today_count, set_today_count) = signal(0usize);
	let (insights, set_insights) = signal(Vec::<Insight>::new());
	let (loading, set_loading) = signal(true);

	let fetch = move || {
		set_loading.set(true);
		spawn_local(async move {
			match api::get_habits().await {
				Ok(data) => set_habit_count.set(data.len()),
				Err(err) => warn!("habit fetch failed: {err}"),
			}
			match api::get_today_completions().await {
				Ok(data) => set_today_count.set(data.len()),
				Err(err) => warn!("completion fetch failed: {err}"),
			}
			match api::get_insights().await {
				Ok(mut data) => {
					data.truncate(3);
					set_insights.set(data);
				}
				Err(err) => warn!("insight fetch failed: {err}"),
			}
			set_loading.set(false);
		});
	};
	fetch();

	let today_label = js_sys::Date::new_0().to_date_string().as_string().unwrap_or_default();

	view! {
		<section class="screen home-screen">
			<header class="screen-header">
				<h1>"Hello, Stargazer"</h1>
				<p class="subtitle">{today_label}</p>
			</header>

			{move || {
				if loading.get() {
					view! { <p class="loading">"Loading..."</p> }.into_any()
				} else {
					view! {
						<div class="stats-card">
							<p class="stats-label">"Today's Progress"</p>
							<p class="stats-value">
								{move || format!("{} / {} habits completed", today_count.get(), habit_count.get())}
							</p>
						</div>

						<div class="quick-actions">
							<A href="/constellation">"View Constellation"</A>
							<A href="/habits">"Add Habit"</A>
						</div>

						<div class="section-header">
							<h2>"Recent Insights"</h2>
							<button on:click=move |_| fetch()>"Refresh"</button>
						</div>

						{move || {
							if insights.get().is_empty() {
								view! { <p class="empty">"No insights yet. Keep logging!"</p> }.into_any()
							} else {
								insights
									.get()
									.into_iter()
									.map(|insight| view! { <InsightCard insight=insight /> })
									.collect_view()
									.into_any()
							}
						}}
					}
					.into_any()
				}
			}}
		</section>
	}
}
