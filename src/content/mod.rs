//! Content service: the operations behind the HTTP API.
//!
//! Each operation is a thin pass-through to the document store. The store handle
//! is injected at construction; without one every data operation fails with
//! [`AppError::StoreUnavailable`] while [`ContentService::health_check`] still answers.
//!
//! Singleton collections (profile, styles) are replaced with a delete followed by
//! an insert. The two steps are not atomic: a concurrent reader can see an empty
//! singleton and concurrent writers can leave zero or several documents behind.

pub mod seed;

use chrono::Utc;
use serde_json::Value;

use crate::db::{DocumentStore, Filter};
use crate::errors::{truncate_detail, AppError};
use crate::models::{
    to_document, Collection, ContentBundle, Document, GlobalStyles, HealthReport, SeedStatus,
    GLOBAL_STYLES_KEY,
};

/// Maximum number of collection names in a health report.
const MAX_REPORTED_COLLECTIONS: usize = 10;

#[derive(Clone)]
pub struct ContentService {
    store: Option<DocumentStore>,
}

impl ContentService {
    pub fn new(store: Option<DocumentStore>) -> Self {
        Self { store }
    }

    fn store(&self) -> Result<&DocumentStore, AppError> {
        self.store.as_ref().ok_or(AppError::StoreUnavailable)
    }

    /// Fetch every collection and assemble the content bundle.
    ///
    /// List lookups propagate store errors. The styles lookup never fails: any
    /// error or a missing document yields [`GlobalStyles::default`].
    pub async fn get_all_content(&self) -> Result<ContentBundle, AppError> {
        let store = self.store()?;

        let eras = list(store, Collection::Era).await?;
        let projects = list(store, Collection::Project).await?;
        let skills = list(store, Collection::Skill).await?;
        let achievements = list(store, Collection::Achievement).await?;
        let profile = list(store, Collection::Profile).await?.into_iter().next();
        let styles = global_styles(store).await;

        Ok(ContentBundle {
            eras,
            projects,
            skills,
            achievements,
            profile,
            styles,
        })
    }

    /// Insert `payload` verbatim into `collection` and return the new identifier.
    ///
    /// Payloads that do not match the collection's shape are logged and stored anyway.
    pub async fn create_document(
        &self,
        collection: Collection,
        mut payload: Document,
    ) -> Result<String, AppError> {
        let store = self.store()?;

        if let Err(reason) = collection.check_shape(&payload) {
            tracing::warn!(%collection, "Storing non-conforming document: {}", reason);
        }

        let now = Value::String(Utc::now().to_rfc3339());
        payload.entry("created_at").or_insert_with(|| now.clone());
        payload.entry("updated_at").or_insert(now);

        store.insert_one(collection.as_str(), payload).await
    }

    /// Replace the profile: every stored profile is deleted before the insert.
    pub async fn set_profile(&self, payload: Document) -> Result<String, AppError> {
        self.store()?
            .delete_many(Collection::Profile.as_str(), &Filter::all())
            .await?;
        self.create_document(Collection::Profile, payload).await
    }

    /// Replace the global styles. The payload's `key` is always forced to `"global"`.
    pub async fn set_styles(&self, mut payload: Document) -> Result<String, AppError> {
        self.store()?
            .delete_many(Collection::Styles.as_str(), &Filter::eq("key", GLOBAL_STYLES_KEY))
            .await?;
        payload.insert("key".to_string(), Value::from(GLOBAL_STYLES_KEY));
        self.create_document(Collection::Styles, payload).await
    }

    /// Insert the demo content unless the era collection already holds documents.
    ///
    /// Only the era collection is checked; other collections are inserted into
    /// regardless of what they already contain.
    pub async fn seed_demo(&self) -> Result<SeedStatus, AppError> {
        let store = self.store()?;

        if store
            .count_documents(Collection::Era.as_str(), &Filter::all())
            .await?
            > 0
        {
            return Ok(SeedStatus::AlreadySeeded);
        }

        for era in seed::eras() {
            self.create_document(Collection::Era, to_document(&era)?).await?;
        }
        for project in seed::projects() {
            self.create_document(Collection::Project, to_document(&project)?)
                .await?;
        }
        for skill in seed::skills() {
            self.create_document(Collection::Skill, to_document(&skill)?)
                .await?;
        }
        for achievement in seed::achievements() {
            self.create_document(Collection::Achievement, to_document(&achievement)?)
                .await?;
        }
        self.create_document(Collection::Profile, to_document(&seed::profile())?)
            .await?;
        self.set_styles(seed::styles().into()).await?;

        tracing::info!("Seeded demo content");
        Ok(SeedStatus::Seeded)
    }

    /// Report store connectivity. Never fails; problems degrade the report.
    pub async fn health_check(&self, database_url_set: bool) -> HealthReport {
        let mut report = HealthReport::not_connected();

        let Some(store) = &self.store else {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        };

        report.database = "✅ Available".to_string();
        let url_status = if database_url_set { "✅ Set" } else { "❌ Not Set" };
        report.database_url = Some(url_status.to_string());
        report.database_name = Some(store.name().unwrap_or("✅ Connected").to_string());
        report.connection_status = "Connected".to_string();

        match store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                report.collections = collections;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!("Collection listing failed: {}", e);
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_detail(&e.message())
                );
            }
        }

        report
    }
}

async fn list(store: &DocumentStore, collection: Collection) -> Result<Vec<Document>, AppError> {
    store.find(collection.as_str(), &Filter::all(), None).await
}

async fn global_styles(store: &DocumentStore) -> Document {
    let filter = Filter::eq("key", GLOBAL_STYLES_KEY);
    match store.find(Collection::Styles.as_str(), &filter, Some(1)).await {
        Ok(found) => found
            .into_iter()
            .next()
            .unwrap_or_else(|| GlobalStyles::default().into()),
        Err(e) => {
            tracing::warn!("Falling back to default styles: {}", e);
            GlobalStyles::default().into()
        }
    }
}
