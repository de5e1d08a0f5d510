use super::view_model::ConfigurationDetailsViewModel;
use crate::domain::a002_configuration_parameter::ui::ParameterRow;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::toast::Toast;
use crate::shared::components::ui::Button;
use contracts::domain::common::DocumentCode;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Parameter editor for one document, selected by the `evrakno` query parameter
#[component]
#[allow(non_snake_case)]
pub fn ConfigurationDetails() -> impl IntoView {
    let query_map = use_query_map();
    let code = Memo::new(move |_| {
        DocumentCode::from_query(query_map.with(|q| q.get("evrakno")).as_deref())
    });

    let vm = ConfigurationDetailsViewModel::new();
    Effect::new(move |_| vm.load(code.get()));

    let title = Signal::derive(move || {
        vm.detail
            .with(|d| d.as_ref().map(|d| d.name.clone()))
            .unwrap_or_default()
    });
    let subtitle = Signal::derive(move || vm.detail.with(|d| d.as_ref().map(|d| d.description.clone())));
    let code_badge = Signal::derive(move || Some(code.get().to_string()));
    let is_unknown = move || vm.detail.with(|d| d.as_ref().is_some_and(|d| !d.known));

    view! {
        <div class="page">
            <PageHeader title=title code=code_badge subtitle=subtitle>
                <a class="button button--ghost" href="/Yapilandirma/Liste">
                    <i class="fa-solid fa-arrow-left"></i>
                    <span>"Listeye dön"</span>
                </a>
                <Button
                    icon="fa-floppy-disk"
                    title="Kaydet"
                    disabled=Signal::derive(move || vm.detail.with(|d| d.is_none()))
                    on_click=Callback::new(move |_| vm.save_command())
                >
                    "Kaydet"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.loading.get().then(|| view! { <div class="page__loading">"Yükleniyor..."</div> })}
            <Show when=is_unknown>
                <div class="alert alert--warning">
                    {move || format!("{} için tanımlı parametre bulunamadı.", code.get())}
                </div>
            </Show>

            <div class="param-toolbar">
                <SearchBox id="paramSearch" placeholder="Parametre ara..." value=vm.query />
            </div>

            <div id="paramList" class="param-list">
                <For
                    each=move || vm.rows.get()
                    key=|row| row.code.clone()
                    children=move |row| {
                        let code = row.code.clone();
                        view! {
                            <ParameterRow
                                row=row
                                values=vm.values
                                hidden=Signal::derive(move || vm.is_row_hidden(&code))
                            />
                        }
                    }
                />
            </div>

            <Show when=move || !vm.rows.with(Vec::is_empty) && vm.visible_count() == 0>
                <div class="page__empty">"Eşleşen parametre yok."</div>
            </Show>

            <Toast toast=vm.toast />
        </div>
    }
}
