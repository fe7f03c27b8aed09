pub mod content_controller;
pub mod generation_service;
pub mod variation_parser;
