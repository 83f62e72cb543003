use super::{
    repository::LeaveBalancesRepository,
    utils::{BalanceEditor, LeaveBalanceFormState},
};
use crate::api::{ApiClient, ApiError, Employee, LeaveBalance, LeaveBalancePayload};
use crate::components::messages::{schedule_dismiss, MessageState};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SaveBalance {
    pub id: Option<i64>,
    pub payload: LeaveBalancePayload,
}

#[derive(Clone, Copy)]
pub struct LeaveBalancesViewModel {
    pub form: LeaveBalanceFormState,
    pub editor: RwSignal<BalanceEditor>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<MessageState>,
    pub employees: Signal<Vec<Employee>>,
    pub balances: Signal<Vec<LeaveBalance>>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
    pub save_action: Action<SaveBalance, Result<(), ApiError>>,
}

impl LeaveBalancesViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.form_error.set(None);
        self.editor.set(BalanceEditor::Create);
    }

    pub fn open_edit(&self, balance: &LeaveBalance) {
        self.form.load(balance);
        self.form_error.set(None);
        self.editor.set(BalanceEditor::Edit(balance.id));
    }

    pub fn close(&self) {
        self.editor.set(BalanceEditor::Closed);
        self.form_error.set(None);
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let editor = self.editor.get_untracked();
        if !editor.is_open() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.form_error.set(None);
                self.save_action.dispatch(SaveBalance {
                    id: editor.record_id(),
                    payload,
                });
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }
}

pub fn use_leave_balances_view_model() -> LeaveBalancesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveBalancesRepository::new_with_client(Rc::new(api)));
    let form = LeaveBalanceFormState::default();
    let editor = create_rw_signal(BalanceEditor::Closed);
    let form_error = create_rw_signal(None::<ApiError>);
    let message = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let employees_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_employees().await }
        },
    );
    let balances_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_balances().await }
        },
    );

    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let balances = Signal::derive(move || {
        balances_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let employees_loading = employees_resource.loading();
    let balances_loading = balances_resource.loading();
    let loading = Signal::derive(move || employees_loading.get() || balances_loading.get());
    let load_error = Signal::derive(move || {
        balances_resource
            .get()
            .and_then(Result::err)
            .or_else(|| employees_resource.get().and_then(Result::err))
    });

    let save_action = create_action(move |request: &SaveBalance| {
        let repo = repository.get_value();
        let request = request.clone();
        async move { repo.save(request.id, request.payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    let text = match editor.get_untracked() {
                        BalanceEditor::Edit(_) => "Leave balance updated.",
                        _ => "Leave balance created.",
                    };
                    editor.set(BalanceEditor::Closed);
                    form.reset();
                    message.update(|msg| msg.set_success(text));
                    schedule_dismiss(message);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => form_error.set(Some(err)),
            }
        }
    });

    LeaveBalancesViewModel {
        form,
        editor,
        form_error,
        message,
        employees,
        balances,
        loading,
        load_error,
        save_action,
    }
}

#[derive(Clone, Copy)]
pub struct MyLeaveBalanceViewModel {
    pub balance: Signal<Option<LeaveBalance>>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
}

pub fn use_my_leave_balance_view_model() -> MyLeaveBalanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveBalancesRepository::new_with_client(Rc::new(api)));
    let resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.my_balance().await }
        },
    );

    MyLeaveBalanceViewModel {
        balance: Signal::derive(move || resource.get().and_then(Result::ok).flatten()),
        loading: resource.loading(),
        load_error: Signal::derive(move || resource.get().and_then(Result::err)),
    }
}
