pub mod http_server;
pub mod page_handlers;
pub mod page_paths;
pub mod session;
pub mod timing_layer;
