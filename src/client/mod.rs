pub mod activity_client;
pub mod api_paths;

#[cfg(test)]
pub mod mock_backend;
