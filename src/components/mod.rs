//! Reusable view components.

pub mod constellation;
mod habit_card;
mod insight_card;

pub use habit_card::HabitCard;
pub use insight_card::InsightCard;
