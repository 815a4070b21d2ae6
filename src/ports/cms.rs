//! CMS protocol.

use async_trait::async_trait;

use crate::domain::{Document, Faq, WorkerError};

/// Port for CMS content reads.
#[async_trait]
pub trait CmsApi: Send + Sync {
    /// Loads a CMS document by id.
    async fn document(&self, document_id: &str) -> Result<Document, WorkerError>;

    /// Lists all FAQ entries in display order.
    async fn faqs(&self) -> Result<Vec<Faq>, WorkerError>;
}
