// src/repositories/report_repository.rs
//
// Report persistence

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::report::{Report, ReportCategory, ReportStatus, ReportUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::document::{DocumentCollection, DocumentRecord};

impl DocumentRecord for Report {
    const COLLECTION: &'static str = "reports";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub trait ReportRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Report>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Report>>;
    fn save(&self, report: &Report) -> AppResult<()>;
    fn update(&self, id: &str, changes: &ReportUpdate) -> AppResult<Report>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn get_by_reporter(&self, reporter_id: &str) -> AppResult<Vec<Report>>;
    fn get_by_reported_user(&self, reported_user_id: &str) -> AppResult<Vec<Report>>;
    fn get_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>>;
    fn get_by_category(&self, category: ReportCategory) -> AppResult<Vec<Report>>;
    fn get_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Report>>;
}

pub struct SqliteReportRepository {
    collection: DocumentCollection<Report>,
}

impl SqliteReportRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            collection: DocumentCollection::new(pool),
        }
    }

    fn update_record(&self, id: &str, changes: &ReportUpdate) -> AppResult<Report> {
        let mut record = self.collection.get(id)?.ok_or(AppError::NotFound)?;
        record.apply(changes);
        self.collection.put(&record)?;
        Ok(record)
    }
}

impl ReportRepository for SqliteReportRepository {
    fn get_all(&self) -> AppResult<Vec<Report>> {
        self.collection
            .get_all()
            .map_err(|e| AppError::operation("get all reports", e))
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Report>> {
        self.collection
            .get(id)
            .map_err(|e| AppError::operation("get report by id", e))
    }

    fn save(&self, report: &Report) -> AppResult<()> {
        self.collection
            .put(report)
            .map_err(|e| AppError::operation("save report", e))
    }

    fn update(&self, id: &str, changes: &ReportUpdate) -> AppResult<Report> {
        self.update_record(id, changes)
            .map_err(|e| AppError::operation("update report", e))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.collection
            .delete(id)
            .map_err(|e| AppError::operation("delete report", e))
    }

    fn get_by_reporter(&self, reporter_id: &str) -> AppResult<Vec<Report>> {
        self.collection
            .find_by(&[("reporterId", reporter_id)])
            .map_err(|e| AppError::operation("get reports by reporter", e))
    }

    fn get_by_reported_user(&self, reported_user_id: &str) -> AppResult<Vec<Report>> {
        self.collection
            .find_by(&[("reportedUserId", reported_user_id)])
            .map_err(|e| AppError::operation("get reports by reported user", e))
    }

    fn get_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>> {
        self.collection
            .find_by(&[("status", &status.to_string())])
            .map_err(|e| AppError::operation("get reports by status", e))
    }

    fn get_by_category(&self, category: ReportCategory) -> AppResult<Vec<Report>> {
        self.collection
            .find_by(&[("category", &category.to_string())])
            .map_err(|e| AppError::operation("get reports by category", e))
    }

    fn get_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Report>> {
        self.collection
            .find_created_between(from.timestamp_millis(), to.timestamp_millis())
            .map_err(|e| AppError::operation("get reports by date range", e))
    }
}
