use leptos::prelude::*;

/// Titled wrapper with an ASCII rule heading, a `§` anchor and an optional
/// link to the section's own page.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="deck-section">
            <h2>
                {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", title)}
                <a href=anchor_href class="section-anchor">" \u{00A7}"</a>
            </h2>
            {href.map(|href| view! { <a href=href class="section-anchor">"open deck \u{2192}"</a> })}
            <div class="section-body">{children()}</div>
        </section>
    }
}
