use dotenvy::dotenv;
use std::sync::Arc;

use crate::database::AppDatabase;
use crate::mailer::{ApiMailer, CodeMailer};
use crate::store::{MongoOtpStore, OtpStore};
use crate::utils::{get_epoch_ts, AppError};

pub mod issue;
pub mod verify;

pub use issue::IssueCodeReq;
pub use verify::VerifyCodeReq;

/// Purpose-parameterized otp service. Issuance and verification are two
/// operations over one shared record lifecycle; both are stateless and
/// all state lives in the record store.
pub struct OtpService<S, M> {
    store: Arc<S>,
    mailer: Arc<M>,
}

impl<S: OtpStore, M: CodeMailer> OtpService<S, M> {
    pub fn new(store: Arc<S>, mailer: Arc<M>) -> Self {
        Self { store, mailer }
    }

    /// Delete every used or expired record. The cleanup job invokes this
    /// on a schedule; issuance also reaps per recipient opportunistically.
    pub async fn sweep(&self) -> Result<u64, AppError> {
        let now = get_epoch_ts();
        let deleted = self.store.sweep(now).await?;
        if deleted > 0 {
            tracing::debug!("cleaned up {deleted} stale otp records");
        }
        Ok(deleted)
    }
}

impl OtpService<MongoOtpStore, ApiMailer> {
    /// Wire the service from environment configuration, the mongodb
    /// record store plus the HTTP mail provider
    pub async fn from_env() -> anyhow::Result<Self> {
        // import .env file
        dotenv().ok();
        let db = AppDatabase::new().await?;
        let store = MongoOtpStore::new(Arc::new(db));
        let mailer = ApiMailer::new()?;
        Ok(Self::new(Arc::new(store), Arc::new(mailer)))
    }
}
