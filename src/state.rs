use crate::{db::OrmConn, middleware::auth::AdminGate, uploads::ImageIntake};

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub admin_gate: AdminGate,
    pub images: ImageIntake,
}
