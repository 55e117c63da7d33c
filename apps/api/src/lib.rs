pub mod config;
pub mod demo;
pub mod errors;
pub mod form;
pub mod gateway;
pub mod llm_client;
pub mod routes;
pub mod state;
