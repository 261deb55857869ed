pub mod api_client;
pub mod avatar;
pub mod services;
pub mod testing;
