pub mod bus_location_item;
pub mod city_code_item;
pub mod serde_helpers;
pub mod tago_envelope;
pub mod tago_service_error;
