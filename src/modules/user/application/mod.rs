pub mod domain;
pub mod errors;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod use_cases;
