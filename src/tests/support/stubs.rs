use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::fetch_session::{
    FetchSessionError, FetchSessionUseCase,
};
use crate::modules::auth::application::use_cases::login_admin::{
    AdminInfo, LoginAdminResponse, LoginAdminUseCase, LoginError, LoginRequest,
};
use crate::modules::auth::application::use_cases::logout_admin::{
    LogoutAdminUseCase, LogoutError, LogoutRequest,
};
use crate::modules::auth::application::use_cases::refresh_token::{
    RefreshError, RefreshTokenUseCase,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::Record;

/// In-memory gateway with call counters. Behaves like the Postgres adapters:
/// pending saves insert with a fresh id, persisted saves replace, delete of
/// a missing row succeeds.
pub struct InMemoryGateway<R: Record> {
    records: Mutex<Vec<R>>,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl<R: Record> InMemoryGateway<R> {
    pub fn new(seed: Vec<R>) -> Self {
        InMemoryGateway {
            records: Mutex::new(seed),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn stored(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl<R: Record> ResourceGateway<R> for InMemoryGateway<R> {
    async fn list(&self) -> Vec<R> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().clone()
    }

    async fn save(&self, mut record: R) -> Result<R, GatewayError> {
        let mut records = self.records.lock().unwrap();
        match record.identity().persisted_id() {
            None => {
                record.set_identity(Identity::persisted(Uuid::new_v4()));
                records.push(record.clone());
                Ok(record)
            }
            Some(_) => {
                let position = records
                    .iter()
                    .position(|r| r.identity() == record.identity())
                    .ok_or(GatewayError::NotFound)?;
                records[position] = record.clone();
                Ok(record)
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.identity().persisted_id() != Some(id));
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Default auth stubs for handler tests
// ──────────────────────────────────────────────────────────

pub struct StubLoginUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutAdminUseCase for StubLogoutUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubRefreshUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshError> {
        Err(RefreshError::InvalidToken)
    }
}

pub struct StubFetchSessionUseCase;

#[async_trait]
impl FetchSessionUseCase for StubFetchSessionUseCase {
    async fn execute(&self, _admin_id: Uuid) -> Result<AdminInfo, FetchSessionError> {
        Err(FetchSessionError::NotFound)
    }
}
