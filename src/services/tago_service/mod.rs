pub mod tago_service;
pub mod types;
pub mod xml_tree;
