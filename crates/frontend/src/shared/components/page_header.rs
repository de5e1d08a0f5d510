use leptos::prelude::*;

/// Page title block with optional code badge, description and action buttons
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Document code shown as a badge before the title
    #[prop(optional, into)]
    code: MaybeProp<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {move || code.get().map(|c| view! {
                            <span class="page-header__code">{c}</span>
                        })}
                        {title}
                    </h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
