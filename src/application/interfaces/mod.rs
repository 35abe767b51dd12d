/// Resource kinds and the generic resource service interface
pub mod resource;
