use super::repository::PayslipsRepository;
use crate::api::{ApiClient, ApiError, PayrollRecord};
use crate::components::messages::{schedule_dismiss, MessageState};
use crate::utils::download::{payslip_filename, trigger_file_download, PDF_MIME};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PayslipsViewModel {
    pub payslips: Signal<Vec<PayrollRecord>>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
    pub message: RwSignal<MessageState>,
    pub download_action: Action<PayrollRecord, Result<String, ApiError>>,
}

pub fn use_payslips_view_model() -> PayslipsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(PayslipsRepository::new_with_client(Rc::new(api)));
    let message = create_rw_signal(MessageState::default());

    let resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list().await }
        },
    );

    let download_action = create_action(move |slip: &PayrollRecord| {
        let repo = repository.get_value();
        let slip = slip.clone();
        async move {
            let bytes = repo.pdf(slip.id).await?;
            let filename = payslip_filename(&slip.month, slip.year);
            trigger_file_download(&filename, &bytes, PDF_MIME).map_err(ApiError::unknown)?;
            Ok::<_, ApiError>(filename)
        }
    });

    create_effect(move |_| {
        if let Some(result) = download_action.value().get() {
            match result {
                Ok(filename) => {
                    log::info!("Saved {}", filename);
                    message.update(|msg| msg.set_success(format!("Downloaded {}", filename)));
                }
                Err(err) => message.update(|msg| msg.set_error(err)),
            }
            schedule_dismiss(message);
        }
    });

    PayslipsViewModel {
        payslips: Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default()),
        loading: resource.loading(),
        load_error: Signal::derive(move || resource.get().and_then(Result::err)),
        message,
        download_action,
    }
}
