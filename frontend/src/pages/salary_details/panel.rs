use super::repository::SalaryDetailsRepository;
use crate::api::{ApiClient, SalaryDetails};
use crate::components::{
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use leptos::*;
use std::rc::Rc;

fn salary_rows(details: &SalaryDetails) -> Vec<(&'static str, String)> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".into());
    vec![
        ("Basic salary", format!("{:.2}", details.basic_salary)),
        ("Housing allowance", format!("{:.2}", details.housing_allowance)),
        ("Transport allowance", format!("{:.2}", details.transport_allowance)),
        ("Other allowance", format!("{:.2}", details.other_allowance)),
        ("Total salary", format!("{:.2}", details.total())),
        ("Bank name", text(&details.bank_name)),
        ("Account number", text(&details.account_no)),
        ("IBAN", text(&details.iban)),
        ("SWIFT code", text(&details.swift_code)),
    ]
}

#[component]
fn SalaryDetailsList(details: SalaryDetails) -> impl IntoView {
    view! {
        <dl class="bg-surface-elevated shadow rounded-lg divide-y divide-border">
            {salary_rows(&details)
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="px-6 py-4 grid grid-cols-3 gap-4">
                        <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                        <dd class="text-sm text-fg col-span-2">{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}

#[component]
pub fn SalaryDetailsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(SalaryDetailsRepository::new_with_client(Rc::new(api)));
    let resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.fetch().await }
        },
    );
    let load_error = Signal::derive(move || resource.get().and_then(Result::err));

    view! {
        <div class="space-y-4">
            <PageHeader title="Salary details" />
            <InlineErrorMessage error=load_error />
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || {
                    resource
                        .get()
                        .and_then(Result::ok)
                        .map(|details| view! { <SalaryDetailsList details=details /> })
                }}
            </Suspense>
        </div>
    }
}
