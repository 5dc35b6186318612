//! ViewModel for the order detail page.

use super::edit_session::EditSession;
use super::model;
use super::state::{LoadState, RequestSequence};
use crate::shared::toast::ToastService;
use contracts::domain::order::pricing::order_total;
use contracts::domain::order::StretchData;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct OrderDetailsVm {
    pub state: RwSignal<LoadState>,
    pub edit: RwSignal<EditSession>,
    requests: RwSignal<RequestSequence>,
    toast: ToastService,
}

impl OrderDetailsVm {
    pub fn new(toast: ToastService) -> Self {
        Self {
            state: RwSignal::new(LoadState::Idle),
            edit: RwSignal::new(EditSession::Closed),
            requests: RwSignal::new(RequestSequence::default()),
            toast,
        }
    }

    /// Fetch the order. Re-entrant: every call restarts at `Loading`. A
    /// completion that has been superseded by a newer call is discarded.
    pub fn load(&self, order_id: String) {
        let Some(token) = self.requests.try_update(|s| s.begin()) else {
            return;
        };
        self.state.set(LoadState::Loading);

        let vm = self.clone();
        spawn_local(async move {
            let outcome = model::fetch_order(&order_id).await;
            let current = vm
                .requests
                .try_with_untracked(|s| s.is_current(token))
                .unwrap_or(false);
            if current {
                vm.state.set(LoadState::settle(outcome));
            }
        });
    }

    pub fn total_price(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.order().map(|o| order_total(&o.products)).unwrap_or(0.0))
        })
    }

    /// First record of the first product, the one shown by the measurement
    /// sections.
    pub fn primary_record(&self) -> Signal<Option<StretchData>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.order().and_then(|o| o.primary_stretch_data().cloned())))
    }

    /// Editing is offered iff the order carries its own top-level record,
    /// independent of the per-product records.
    pub fn can_edit(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.order().map(|o| o.stretch_data.is_some()).unwrap_or(false))
        })
    }

    /// Opens the editor over a by-value copy of the order-level record.
    pub fn open_editor(&self) {
        let Some(record) = self
            .state
            .with_untracked(|s| s.order().and_then(|o| o.stretch_data.clone()))
        else {
            return;
        };
        self.edit.update(|session| session.open(record));
    }

    pub fn cancel_editor(&self) {
        self.edit.update(|session| session.cancel());
    }

    /// Submits the edited record. On success the stored record is replaced
    /// wholesale with the record as submitted and a toast is raised; on
    /// failure the editor stays open with the message, ready for retry.
    pub fn submit(&self, edited: StretchData) {
        let Some(record) = self
            .edit
            .try_update(|session| session.begin_submit(edited))
            .flatten()
        else {
            return;
        };

        let vm = self.clone();
        spawn_local(async move {
            match model::update_measurements(&record).await {
                Ok(()) => {
                    vm.state.update(|s| {
                        if let LoadState::Loaded(order) = s {
                            order.stretch_data = Some(record.clone());
                        }
                    });
                    vm.edit.update(|session| session.submit_succeeded());
                    vm.toast.success("Data updated successfully.");
                }
                Err(message) => {
                    log::error!("Failed to update measurements: {}", message);
                    vm.edit.update(|session| session.submit_failed(message));
                }
            }
        });
    }
}
