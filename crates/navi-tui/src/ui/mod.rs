pub mod add_member_modal;
pub mod app;
pub mod connections_view;
pub mod create_group_modal;
pub mod footer;
pub mod header;
pub mod settings_modal;
pub mod users_view;
