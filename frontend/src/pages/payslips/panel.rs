use crate::api::PayrollRecord;
use crate::components::{
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
    messages::MessageBanner,
};
use crate::pages::payslips::{components::table::PayslipTable, view_model::use_payslips_view_model};
use leptos::*;

#[component]
pub fn PayslipsPage() -> impl IntoView {
    let vm = use_payslips_view_model();
    let downloading = vm.download_action.pending();
    let on_download = Callback::new(move |slip: PayrollRecord| {
        if !downloading.get_untracked() {
            vm.download_action.dispatch(slip);
        }
    });

    view! {
        <div class="space-y-4">
            <PageHeader title="Payslips" description="Monthly salary slips available for download." />
            <MessageBanner message=vm.message />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <PayslipTable payslips=vm.payslips downloading=downloading on_download=on_download />
            </Show>
        </div>
    }
}
