pub mod activity;
pub mod activity_form;
pub mod activity_link;
pub mod user;
