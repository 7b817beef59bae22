use crate::services::tago_service::tago_service::TagoService;

#[derive(Clone)]
pub struct AppState {
    pub tago_service: TagoService,
}
