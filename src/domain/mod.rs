// Domain layer: form/response models, page language and ports.

pub mod language;
pub mod model;
pub mod ports;
