pub mod client;
pub mod domain;
pub mod render;
pub mod rest;
pub mod service;
pub mod state;
pub mod util;
