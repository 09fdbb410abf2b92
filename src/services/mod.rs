pub mod formula_codec;
pub mod formula_service;
pub mod presets;
