use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionViewModel {
    pub username: Option<String>,
}
