use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Habit};
use crate::components::HabitCard;

/// The habits tab: list, create form, and per-habit complete action.
/// Mutation failures surface in an inline notice banner.
#[component]
pub fn HabitsPage() -> impl IntoView {
	let (habits, set_habits) = signal(Vec::<Habit>::new());
	let (loading, set_loading) = signal(true);
	let (new_name, set_new_name) = signal(String::new());
	let (notice, set_notice) = signal(Option::<String>::None);

	spawn_local(async move {
		match api::get_habits().await {
			Ok(data) => set_habits.set(data),
			Err(err) => set_notice.set(Some(err.to_string())),
		}
		set_loading.set(false);
	});

	let create = move |_| {
		let name = new_name.get_untracked().trim().to_string();
		if name.is_empty() {
			set_notice.set(Some("Please enter a habit name.".into()));
			return;
		}
		spawn_local(async move {
			match api::create_habit(&name, "other", "medium").await {
				Ok(created) => {
					set_habits.update(|list| list.insert(0, created));
					set_new_name.set(String::new());
					set_notice.set(None);
				}
				Err(err) => set_notice.set(Some(err.to_string())),
			}
		});
	};

	let complete = Callback::new(move |habit_id: i64| {
		spawn_local(async move {
			match api::complete_habit(habit_id, 10).await {
				Ok(_) => set_notice.set(Some("Nice work! Habit completed for today.".into())),
				Err(err) => set_notice.set(Some(err.to_string())),
			}
		});
	});

	view! {
		<section class="screen habits-screen">
			<header class="screen-header">
				<h1>"Habits"</h1>
				<p class="subtitle">"Stardust Balance: 120 ✨"</p>
			</header>

			<div class="habit-form">
				<input
					type="text"
					placeholder="New habit name"
					prop:value=move || new_name.get()
					on:input=move |ev| set_new_name.set(event_target_value(&ev))
				/>
				<button on:click=create>"Add"</button>
			</div>

			{move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}

			{move || {
				if loading.get() {
					view! { <p class="loading">"Loading..."</p> }.into_any()
				} else if habits.get().is_empty() {
					view! { <p class="empty">"No habits yet. Add your first one!"</p> }.into_any()
				} else {
					view! {
						<div class="habit-list">
							<For each=move || habits.get() key=|habit| habit.id let:habit>
								<HabitCard habit=habit on_complete=complete />
							</For>
						</div>
					}
					.into_any()
				}
			}}
		</section>
	}
}
