pub mod config;
pub mod db;
pub mod docstore;
pub mod dto;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;
