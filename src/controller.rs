//! The snapshot controller: generation, the single-slot store, and the
//! action-dispatch state machine.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::actions::{ActionReceipt, ActionRequest, VALUE_ACTIONS};
use crate::dom::walker::Walker;
use crate::error::{DispatchError, SnapshotError};
use crate::page::PageDriver;
use crate::snapshot::resolve::find_by_ref;
use crate::snapshot::store::SnapshotStore;
use crate::snapshot::types::{Snapshot, SnapshotOptions};

/// Drives one page through snapshots and ref-addressed actions.
///
/// The controller assumes a single logical owner of the page: generation,
/// clearing, and dispatch are not mutually exclusive, and two overlapping
/// generations race on the store slot with the later write winning.
/// Serializing calls against the same page is the caller's responsibility.
pub struct SnapshotController {
    driver: Arc<dyn PageDriver>,
    store: SnapshotStore,
}

impl SnapshotController {
    pub fn new(driver: Arc<dyn PageDriver>) -> Self {
        Self {
            driver,
            store: SnapshotStore::new(),
        }
    }

    /// Generate a snapshot and store it, wholesale-replacing any previous
    /// one. Ref numbering restarts at `e1` on every call.
    pub async fn generate(&self, options: &SnapshotOptions) -> Result<Snapshot, SnapshotError> {
        let doc = self.driver.capture().await?;
        let (tree, refs) = Walker::new(&doc, options).run();
        let snapshot = Snapshot {
            url: doc.url,
            title: doc.title,
            viewport: doc.viewport,
            timestamp: Utc::now().to_rfc3339(),
            tree,
            refs,
        };
        debug!(url = %snapshot.url, refs = snapshot.refs.len(), "snapshot stored");
        self.store.set(snapshot.clone());
        Ok(snapshot)
    }

    /// Drop the stored snapshot. All previously issued refs become
    /// unresolvable immediately; the live page is untouched.
    pub fn clear(&self) {
        self.store.clear();
        debug!("snapshot cleared");
    }

    /// The currently stored snapshot, if any.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.store.current()
    }

    /// Validate a request, resolve its ref against the stored snapshot, and
    /// delegate to the matching page operation.
    ///
    /// Checks run in a fixed order: missing ref, missing action, empty
    /// store, unresolvable ref, missing value for value-carrying actions,
    /// unknown action. Driver failures propagate verbatim. Dispatch never
    /// mutates the store; a ref stays dispatchable until the snapshot is
    /// replaced or cleared.
    pub async fn dispatch(&self, request: ActionRequest) -> Result<ActionReceipt, DispatchError> {
        let r = request
            .r#ref
            .ok_or_else(|| DispatchError::Validation("ref required".to_string()))?;
        let action = request
            .action
            .ok_or_else(|| DispatchError::Validation("action required".to_string()))?;

        let snapshot = self.store.current().ok_or(DispatchError::NoSnapshot)?;
        let node =
            find_by_ref(&snapshot, &r).ok_or_else(|| DispatchError::NotFound(r.clone()))?;
        let selector = node.selector.clone();

        match (action.as_str(), request.value.as_deref()) {
            ("click", _) => self.driver.click(&selector).await?,
            ("dblclick", _) => self.driver.dblclick(&selector).await?,
            ("hover", _) => self.driver.hover(&selector).await?,
            ("focus", _) => self.driver.focus(&selector).await?,
            ("check", _) => self.driver.check(&selector).await?,
            ("uncheck", _) => self.driver.uncheck(&selector).await?,
            ("fill", Some(value)) => self.driver.fill(&selector, value).await?,
            ("type", Some(value)) => self.driver.type_text(&selector, value).await?,
            ("select", Some(value)) => self.driver.select_option(&selector, value).await?,
            (action, None) if VALUE_ACTIONS.contains(&action) => {
                return Err(DispatchError::Validation(format!(
                    "value required for {}",
                    action
                )));
            }
            (other, _) => return Err(DispatchError::UnknownAction(other.to_string())),
        }

        debug!(reference = %r, action = %action, selector = %selector, "action dispatched");
        Ok(ActionReceipt {
            r#ref: r,
            action,
            selector,
            value: request.value,
        })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
