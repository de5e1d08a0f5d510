use crate::domain::a001_configuration_document::ui::details::ConfigurationDetails;
use crate::domain::a001_configuration_document::ui::list::ConfigurationList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::usecases::u002_production_report::ProductionReportView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-empty">
            <h2>"Sayfa bulunamadı"</h2>
            <a href="/Yapilandirma/Liste">"Yapılandırma listesine dön"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell left=|| view! { <Sidebar /> }.into_any()>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ConfigurationList />
                    <Route path=path!("/Yapilandirma/Liste") view=ConfigurationList />
                    <Route path=path!("/Yapilandirma/Detay") view=ConfigurationDetails />
                    <Route path=path!("/UretimBildirme01/Index") view=ProductionReportView />
                </Routes>
            </Shell>
        </Router>
    }
}
