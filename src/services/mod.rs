pub mod tago_service;
