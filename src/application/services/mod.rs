/// Module containing the generic resource service implementation
pub mod resource_service;

pub use crate::application::interfaces::resource::*;
pub use resource_service::*;
