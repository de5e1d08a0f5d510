use crate::domain::a001_configuration_document::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_box::SearchBox;
use crate::shared::icons::fa;
use contracts::domain::a001_configuration_document::DocumentCard;
use contracts::shared::text_fold::apply_name_filter;
use leptos::prelude::*;

/// Card grid of all configuration documents with a name filter
#[component]
#[allow(non_snake_case)]
pub fn ConfigurationList() -> impl IntoView {
    let cards = RwSignal::new(Vec::<DocumentCard>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_list().await {
            Ok(response) => {
                log::debug!("Loaded {} configuration documents", response.items.len());
                cards.set(response.items);
            }
            Err(e) => {
                log::error!("Failed to load configuration documents: {}", e);
                error.set(Some(format!("Yapılandırmalar yüklenemedi: {}", e)));
            }
        }
        loading.set(false);
    });

    let filtered = Memo::new(move |_| {
        let mut items = cards.get();
        apply_name_filter(&mut items, &query.get());
        items
    });

    let visible_count = move || filtered.with(|items| items.iter().filter(|c| c.visible).count());

    view! {
        <div class="page">
            <PageHeader title={"Yapılandırma".to_string()} subtitle={"Modül yapılandırmaları".to_string()}>
                <SearchBox id="cardSearch" placeholder="Yapılandırma ara..." value=query />
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Yükleniyor..."</div> })}

            <div id="configCards" class="config-cards">
                <For
                    each=move || cards.get()
                    key=|card| card.code.clone()
                    children=move |card| view! { <ConfigurationCard card=card filtered=filtered /> }
                />
            </div>

            <Show when=move || !loading.get() && visible_count() == 0>
                <div class="page__empty">"Eşleşen yapılandırma yok."</div>
            </Show>
        </div>
    }
}

#[component]
fn ConfigurationCard(card: DocumentCard, filtered: Memo<Vec<DocumentCard>>) -> impl IntoView {
    let code = card.code.clone();
    let is_hidden = move || {
        filtered.with(|items| {
            items
                .iter()
                .find(|c| c.code == code)
                .map(|c| !c.visible)
                .unwrap_or(true)
        })
    };

    view! {
        <div class="config-card" class:d-none=is_hidden data-name=card.data_name()>
            <div class="config-card__head">
                <span class="config-card__icon">{fa(&card.icon)}</span>
                <span class="badge">{card.code.to_string()}</span>
            </div>
            <div class="config-card__name">{card.name.clone()}</div>
            <div class="config-card__desc">{card.description.clone()}</div>
            <div class="config-card__foot">
                <span class="config-card__count">{format!("{} parametre", card.parameter_count)}</span>
                <a class="button button--primary" href=card.detail_href()>
                    <span>"Git"</span>
                    <i class="fa-solid fa-arrow-right"></i>
                </a>
            </div>
        </div>
    }
}
