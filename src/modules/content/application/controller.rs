use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::content::application::notice::NoticeBoard;
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::application::workspace::{ItemActivity, LoadState, Workspace};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::Record;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ControllerError {
    /// A save/delete is already outstanding for this item. The gateway has
    /// no idempotency key, so letting a double-submit through could insert a
    /// duplicate row instead of updating one.
    #[error("an operation is already in flight for this item")]
    OperationInFlight,

    /// Delete was requested without the explicit confirmation step.
    #[error("delete requires confirmation")]
    ConfirmationRequired,

    #[error("no such item in this collection")]
    UnknownItem,

    /// Reorder on a collection without an explicit display order.
    #[error("this collection has no display order")]
    NotReorderable,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// List/detail synchronization controller for one collection.
///
/// Owns the in-memory workspace and drives it against the gateway:
/// idempotent loads, draft-based editing, save reconciliation, confirmed
/// optimistic delete with rollback, and reordering. One instance per
/// resource type; all six share this implementation and differ only in the
/// gateway they are wired to.
pub struct ResourceController<R: Record> {
    gateway: Arc<dyn ResourceGateway<R>>,
    notices: Arc<NoticeBoard>,
    workspace: Mutex<Workspace<R>>,
}

impl<R: Record> ResourceController<R> {
    pub fn new(gateway: Arc<dyn ResourceGateway<R>>, notices: Arc<NoticeBoard>) -> Self {
        ResourceController {
            gateway,
            notices,
            workspace: Mutex::new(Workspace::new()),
        }
    }

    /// Fetch the collection. Already-loaded collections are served from the
    /// workspace without a gateway call unless `force` is set; a completed
    /// fetch always wins over whatever the workspace held.
    pub async fn load(&self, force: bool) -> Vec<R> {
        {
            let mut ws = self.workspace.lock().await;
            if ws.state() == LoadState::Loaded && !force {
                return ws.items().to_vec();
            }
            ws.begin_loading();
        }

        let fetched = self.gateway.list().await;

        let mut ws = self.workspace.lock().await;
        ws.install(fetched);
        ws.items().to_vec()
    }

    /// Current workspace contents without touching the gateway.
    pub async fn items(&self) -> Vec<R> {
        self.workspace.lock().await.items().to_vec()
    }

    pub async fn activity(&self, id: Identity) -> ItemActivity {
        self.workspace.lock().await.activity(id)
    }

    pub async fn begin_create(&self) -> R {
        self.workspace.lock().await.begin_create()
    }

    pub async fn begin_edit(&self, id: Identity) -> Result<R, ControllerError> {
        self.workspace
            .lock()
            .await
            .begin_edit(id)
            .ok_or(ControllerError::UnknownItem)
    }

    pub async fn discard(&self, id: Identity) -> bool {
        self.workspace.lock().await.discard(id)
    }

    /// Persist a draft and reconcile the authoritative list with the stored
    /// record. On failure the list is untouched and the attempted draft is
    /// kept open for retry.
    pub async fn save(&self, draft: R) -> Result<R, ControllerError> {
        let pre_save = draft.identity();
        let label = R::KIND.label();

        {
            let mut ws = self.workspace.lock().await;
            if !ws.reserve(pre_save, ItemActivity::Saving) {
                return Err(ControllerError::OperationInFlight);
            }
        }

        let result = self.gateway.save(draft.clone()).await;

        let mut ws = self.workspace.lock().await;
        ws.release(pre_save);
        match result {
            Ok(canonical) => {
                ws.reconcile(pre_save, canonical.clone());
                self.notices.info(format!("Saved {label}"));
                Ok(canonical)
            }
            Err(err) => {
                ws.stash_draft(pre_save, draft);
                self.notices
                    .error(format!("Could not save {label}: {err}"));
                Err(err.into())
            }
        }
    }

    /// Remove an item. Requires the confirmation flag; unpersisted items are
    /// dropped locally with no remote call. Persisted items are removed
    /// optimistically and restored at their original index when the remote
    /// delete fails.
    pub async fn delete(&self, id: Identity, confirmed: bool) -> Result<(), ControllerError> {
        if !confirmed {
            return Err(ControllerError::ConfirmationRequired);
        }
        let label = R::KIND.label();

        let (index, removed, persisted_id) = {
            let mut ws = self.workspace.lock().await;

            match id.persisted_id() {
                // Never persisted: nothing to undo remotely.
                None => {
                    if ws.activity(id) == ItemActivity::Saving {
                        return Err(ControllerError::OperationInFlight);
                    }
                    let _ = ws.remove(id);
                    return Ok(());
                }
                Some(persisted_id) => {
                    if !ws.reserve(id, ItemActivity::Deleting) {
                        return Err(ControllerError::OperationInFlight);
                    }
                    match ws.remove(id) {
                        Some((index, removed)) => (index, removed, persisted_id),
                        None => {
                            ws.release(id);
                            return Err(ControllerError::UnknownItem);
                        }
                    }
                }
            }
        };

        let result = self.gateway.delete(persisted_id).await;

        let mut ws = self.workspace.lock().await;
        ws.release(id);
        match result {
            Ok(()) => {
                self.notices.info(format!("Deleted {label}"));
                Ok(())
            }
            Err(err) => {
                ws.restore(index, removed);
                self.notices
                    .error(format!("Could not delete {label}: {err}"));
                Err(err.into())
            }
        }
    }

    /// Move an item and persist every row whose display order changed. A
    /// partial failure force-reloads the collection so the workspace never
    /// drifts from the store.
    pub async fn reorder(&self, id: Identity, new_index: usize) -> Result<Vec<R>, ControllerError> {
        let label = R::KIND.label();

        let changed = {
            let mut ws = self.workspace.lock().await;
            let ordered = ws
                .items()
                .iter()
                .find(|r| r.identity() == id)
                .map(|r| r.display_order().is_some());
            match ordered {
                None => return Err(ControllerError::UnknownItem),
                Some(false) => return Err(ControllerError::NotReorderable),
                Some(true) => {}
            }
            ws.reorder(id, new_index).ok_or(ControllerError::UnknownItem)?
        };

        for record in changed {
            let pre_save = record.identity();
            match self.gateway.save(record).await {
                Ok(canonical) => {
                    self.workspace.lock().await.reconcile(pre_save, canonical);
                }
                Err(err) => {
                    let fresh = self.gateway.list().await;
                    self.workspace.lock().await.install(fresh);
                    self.notices
                        .error(format!("Could not reorder {label}: {err}"));
                    return Err(err.into());
                }
            }
        }

        Ok(self.items().await)
    }
}
