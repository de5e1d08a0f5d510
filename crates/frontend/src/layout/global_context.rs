use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Off-canvas sidebar; closed on start
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
