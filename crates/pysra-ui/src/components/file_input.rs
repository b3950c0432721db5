//! File Upload Input
//!
//! File picker whose label shows the chosen file name.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use pysra_core::upload;

/// Properties for the FileInput component
#[derive(Clone, PartialEq, Props)]
pub struct FileInputProps {
    /// Input id; the label is tied to it with `for`
    pub id: String,
    /// Accepted file types (e.g. `image/*`)
    #[props(default)]
    pub accept: Option<String>,
    #[props(default = "\u{1F4C1}".to_string())]
    pub icon: String,
}

/// File input with a label that follows the selection
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FileInput { id: "face-image".to_string(), accept: "image/*".to_string() }
/// }
/// ```
#[component]
pub fn FileInput(props: FileInputProps) -> Element {
    let mut file_name = use_signal(|| upload::PLACEHOLDER.to_string());

    let handle_change = move |evt: FormEvent| {
        let files = evt.files().map(|engine| engine.files()).unwrap_or_default();
        let name = upload::label_text(&files);
        tracing::debug!(file = %name, "file selected");
        file_name.set(name);
    };

    rsx! {
        div { class: "file-upload",
            input {
                id: "{props.id}",
                class: "file-upload-input",
                r#type: "file",
                accept: props.accept.clone().unwrap_or_default(),
                onchange: handle_change,
            }
            label { class: "file-upload-label", r#for: "{props.id}",
                span { class: "file-upload-icon", "{props.icon}" }
                div { "{file_name}" }
            }
        }
    }
}
