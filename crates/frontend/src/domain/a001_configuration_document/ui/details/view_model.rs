use super::model::{self, BrowserSink};
use crate::shared::components::toast::show_toast;
use contracts::domain::a001_configuration_document::ConfigurationDetail;
use contracts::domain::a002_configuration_parameter::{
    collect, filter, render, ControlValues, DisplayRow,
};
use contracts::domain::common::{DocumentCode, ParameterCode};
use contracts::shared::toast::ToastState;
use contracts::usecases::u001_save_configuration::notify;
use leptos::prelude::*;

/// ViewModel for the configuration detail page
#[derive(Clone, Copy)]
pub struct ConfigurationDetailsViewModel {
    pub detail: RwSignal<Option<ConfigurationDetail>>,
    pub rows: RwSignal<Vec<DisplayRow>>,
    pub values: RwSignal<ControlValues>,
    pub query: RwSignal<String>,
    pub toast: RwSignal<ToastState>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Code of the most recent `load`; older responses are dropped
    requested: RwSignal<Option<DocumentCode>>,
    filtered: Memo<Vec<DisplayRow>>,
}

impl ConfigurationDetailsViewModel {
    pub fn new() -> Self {
        let rows = RwSignal::new(Vec::<DisplayRow>::new());
        let query = RwSignal::new(String::new());
        let filtered = Memo::new(move |_| {
            let mut current = rows.get();
            filter(&mut current, &query.get());
            current
        });

        Self {
            detail: RwSignal::new(None),
            rows,
            values: RwSignal::new(ControlValues::default()),
            query,
            toast: RwSignal::new(ToastState::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            requested: RwSignal::new(None),
            filtered,
        }
    }

    /// Fetch the catalog for `code`, render rows and seed control values
    pub fn load(&self, code: DocumentCode) {
        let vm = *self;
        vm.requested.set(Some(code.clone()));
        vm.loading.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_detail(code.clone()).await;
            if !is_current_request(vm.requested.get_untracked().as_ref(), &code) {
                log::debug!("Dropping stale response for {}", code);
                return;
            }
            match result {
                Ok(detail) => {
                    let rows = render(&detail.catalog);
                    log::debug!("Rendered {} rows for {}", rows.len(), detail.code);
                    vm.values.set(ControlValues::seeded(&rows));
                    vm.rows.set(rows);
                    vm.detail.set(Some(detail));
                }
                Err(e) => {
                    log::error!("Failed to load configuration {}: {}", code, e);
                    vm.error.set(Some(format!("Yükleme hatası: {}", e)));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn is_row_hidden(&self, code: &ParameterCode) -> bool {
        self.filtered.with(|rows| {
            rows.iter()
                .find(|r| &r.code == code)
                .map(|r| !r.visible)
                .unwrap_or(false)
        })
    }

    pub fn visible_count(&self) -> usize {
        self.filtered
            .with(|rows| rows.iter().filter(|r| r.visible).count())
    }

    /// Collect every row, hidden ones included, and hand them to the save sink
    pub fn save_command(&self) {
        let Some(document) = self.detail.with(|d| d.as_ref().map(|d| d.code.clone())) else {
            return;
        };
        let results = self
            .rows
            .with(|rows| self.values.with(|values| collect(rows, values)));
        let notice = notify(&document, results, &BrowserSink);
        show_toast(self.toast, notice.message, notice.dismiss_after);
    }
}

fn is_current_request(requested: Option<&DocumentCode>, loaded: &DocumentCode) -> bool {
    requested == Some(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_request_is_applied() {
        let first = DocumentCode::new("YPLN-0001");
        let latest = DocumentCode::new("YPLN-0003");
        assert!(is_current_request(Some(&latest), &latest));
        assert!(!is_current_request(Some(&latest), &first));
        assert!(!is_current_request(None, &first));
    }
}
