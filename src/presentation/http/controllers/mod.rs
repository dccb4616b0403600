// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod authors;
pub mod me;

use serde::Deserialize;

/// `page`/`limit`/`q` query parameters shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}
