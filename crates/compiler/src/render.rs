//! Render orchestration over the two external collaborators.
//!
//! The compiler itself is pure and synchronous; fetching the résumé record
//! and the theme's style config is the only asynchronous boundary, and it
//! lives behind these two traits so callers can plug in any backing store.
//! Carried as `Arc<dyn Trait>`, so implementations swap without touching
//! the compile path.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::ast::{RenderTarget, ResumeAst};
use crate::compiler::compile;
use crate::dsl::merge::merge_dsl;
use crate::errors::ThemeError;
use crate::models::resume::ResumeRecord;

/// Supplies résumé records (section content + the résumé's own theme
/// customizations). The compiler only reads; it never writes back.
#[async_trait]
pub trait ResumeProvider: Send + Sync {
    async fn resume(&self, resume_id: Uuid) -> Result<ResumeRecord, ThemeError>;
    /// Lookup by public-sharing slug.
    async fn public_resume(&self, slug: &str) -> Result<ResumeRecord, ThemeError>;
}

/// Supplies the stored base theme document (`styleConfig`), a raw DSL value.
#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn style_config(&self, theme_id: Uuid) -> Result<Value, ThemeError>;
}

/// Fetch → merge → compile, for authenticated and public rendering.
pub struct RenderService {
    provider: Arc<dyn ResumeProvider>,
    themes: Arc<dyn ThemeStore>,
}

impl RenderService {
    pub fn new(provider: Arc<dyn ResumeProvider>, themes: Arc<dyn ThemeStore>) -> Self {
        Self { provider, themes }
    }

    pub async fn render(
        &self,
        resume_id: Uuid,
        target: RenderTarget,
    ) -> Result<ResumeAst, ThemeError> {
        let record = self.provider.resume(resume_id).await?;
        self.compile_record(record, target).await
    }

    pub async fn render_public(
        &self,
        slug: &str,
        target: RenderTarget,
    ) -> Result<ResumeAst, ThemeError> {
        let record = self.provider.public_resume(slug).await?;
        self.compile_record(record, target).await
    }

    /// Merges the base theme with the résumé's customizations (overrides
    /// winning leaf by leaf) and compiles with real content.
    async fn compile_record(
        &self,
        record: ResumeRecord,
        target: RenderTarget,
    ) -> Result<ResumeAst, ThemeError> {
        let base = self.themes.style_config(record.active_theme_id).await?;
        let doc = match &record.custom_theme {
            Some(overrides) => merge_dsl(&base, overrides),
            None => base,
        };
        info!(resume_id = %record.id, theme_id = %record.active_theme_id, "rendering resume");
        compile(&doc, target, Some(&record))
    }
}
