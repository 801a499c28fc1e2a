use leptos::prelude::*;

use crate::api::Habit;
use crate::components::constellation::Category;

/// A single habit row with its category accent and a complete button.
#[component]
pub fn HabitCard(habit: Habit, on_complete: Callback<i64>) -> impl IntoView {
	let color = Category::parse(&habit.category).color();
	let id = habit.id;

	view! {
		<div class="habit-card" style=format!("border-left: 4px solid {color};")>
			<div class="habit-card-info">
				<p class="habit-card-name">{habit.name}</p>
				<p class="habit-card-category">{habit.category}</p>
			</div>
			<button class="habit-card-complete" on:click=move |_| on_complete.run(id)>
				"Complete"
			</button>
		</div>
	}
}
