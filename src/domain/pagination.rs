// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// One-based offset page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> DomainResult<Self> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }

        let limit = match limit {
            None | Some(0) => DEFAULT_PAGE_LIMIT,
            Some(value) => value.min(MAX_PAGE_LIMIT),
        };

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
