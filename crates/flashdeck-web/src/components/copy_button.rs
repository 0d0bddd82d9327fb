use leptos::prelude::*;

/// How long the "copied" feedback stays before the label comes back.
const RESET_AFTER_MS: u32 = 2000;

/// Inline click handler: copy `text`, show `copied`, then restore the label.
fn copy_script(text: &str, copied: &str) -> String {
    // JSON string literals are valid JS string literals, so quotes,
    // backslashes and newlines can't break out of the handler.
    let literal = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "navigator.clipboard.writeText({}).then(() => {{ \
            const btn = this; \
            const original = btn.textContent; \
            btn.textContent = {}; \
            setTimeout(() => btn.textContent = original, {}); \
        }})",
        literal(text),
        literal(copied),
        RESET_AFTER_MS
    )
}

/// A button that copies text to clipboard with visual feedback.
/// Plain inline JavaScript, so it works before (and without) the wasm bundle.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
    /// Label shown briefly after a successful copy
    #[prop(into, default = "copied!".to_string())]
    copied_label: String,
) -> impl IntoView {
    let onclick_js = copy_script(&text, &copied_label);

    view! {
        <button type="button" onclick=onclick_js class="copy-button">
            {label}
        </button>
    }
}
