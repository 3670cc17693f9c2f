//! REST API layer

pub mod body;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod openapi;
pub mod path;
pub mod routes;
pub mod validation;
