use super::api;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductionReportView() -> impl IntoView {
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_data().await {
            Ok(data) => message.set(Some(data.message)),
            Err(e) => {
                log::error!("Failed to load production report: {}", e);
                error.set(Some(format!("Veri alınamadı: {}", e)));
            }
        }
    });

    view! {
        <div class="page">
            <PageHeader title={"Üretim Bildirme".to_string()}>
                {()}
            </PageHeader>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="report-card">
                {move || message.get().unwrap_or_else(|| "Yükleniyor...".to_string())}
            </div>
        </div>
    }
}
