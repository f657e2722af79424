//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod bilingual_field;
mod feature_editor;
mod lang_switch;
mod tier_board;
mod tier_modal;
mod tier_row;
mod tool_card;
mod tool_modal;
mod unranked_pool;

pub use action_bar::ActionBar;
pub use bilingual_field::BilingualField;
pub use feature_editor::FeatureEditor;
pub use lang_switch::LangSwitch;
pub use tier_board::TierBoard;
pub use tier_modal::{TierModal, TierModalState};
pub use tier_row::TierRow;
pub use tool_card::ToolCard;
pub use tool_modal::{ToolModal, ToolModalState};
pub use unranked_pool::UnrankedPool;
