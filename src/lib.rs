pub mod configuration;
pub mod constant;
pub mod domain;
pub mod email_client;
pub mod error;
pub mod lead_form;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
