pub mod filter_panel;
pub mod modal;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
