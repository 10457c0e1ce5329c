pub mod add_form;
pub mod board;
pub mod entity_card;
pub mod export_button;
pub mod filters_panel;
pub mod header;
pub mod pager;
pub mod stats_panel;
