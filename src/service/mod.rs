pub mod activity_editor;
pub mod activity_loader;
