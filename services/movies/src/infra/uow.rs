use anyhow::Context as _;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::error::MoviesServiceError;
use crate::infra::db::{
    DbActorRepository, DbCommentRepository, DbMovieRepository, DbReviewRepository,
    DbSecurityRepository, DbUserRepository,
};
use crate::infra::queries::DbReportRepository;

/// One transaction per request. Every repository handed out borrows it.
///
/// Dropping the unit of work without calling [`DbUnitOfWork::commit`] rolls
/// the transaction back.
pub struct DbUnitOfWork {
    txn: DatabaseTransaction,
}

impl DbUnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, MoviesServiceError> {
        let txn = db.begin().await.context("begin transaction")?;
        Ok(Self { txn })
    }

    pub fn movies(&self) -> DbMovieRepository<'_> {
        DbMovieRepository { db: &self.txn }
    }

    pub fn actors(&self) -> DbActorRepository<'_> {
        DbActorRepository { db: &self.txn }
    }

    pub fn users(&self) -> DbUserRepository<'_> {
        DbUserRepository { db: &self.txn }
    }

    pub fn reviews(&self) -> DbReviewRepository<'_> {
        DbReviewRepository { db: &self.txn }
    }

    pub fn comments(&self) -> DbCommentRepository<'_> {
        DbCommentRepository { db: &self.txn }
    }

    pub fn securities(&self) -> DbSecurityRepository<'_> {
        DbSecurityRepository { db: &self.txn }
    }

    pub fn reports(&self) -> DbReportRepository<'_> {
        DbReportRepository { db: &self.txn }
    }

    pub async fn commit(self) -> Result<(), MoviesServiceError> {
        self.txn.commit().await.context("commit transaction")?;
        Ok(())
    }
}
