pub mod conf;
pub mod error;
pub mod handlers;
pub mod models;
pub mod player_id;
pub mod resolver;
pub mod routes;
pub mod state;
