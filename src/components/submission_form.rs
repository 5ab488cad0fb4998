//! Submission-create form for the student dashboard.
//!
//! The PDF file is validated client-side before anything goes on the wire;
//! a missing file never issues a request. On success the fields reset and
//! the caller's reload callback runs.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::submissions::{create_submission, validate_new_submission};

/// Title + description + PDF upload form. `on_created` fires after the
/// backend accepts the submission, so the page can reload its list.
#[component]
pub fn SubmissionForm(on_created: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            if let Err(err) = validate_new_submission(file.is_some()) {
                error.set(Some(err.to_string()));
                return;
            }
            let Some(file) = file else {
                return;
            };

            submitting.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let result = create_submission(
                    &title.get_untracked(),
                    &description.get_untracked(),
                    &file,
                )
                .await;
                match result {
                    Ok(_) => {
                        title.set(String::new());
                        description.set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        on_created.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <form on:submit=on_submit class="form-grid">
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="alert alert-error">{message}</div> })
            }}

            <div class="form-field">
                <label class="form-label">"Judul"</label>
                <input
                    class="form-input"
                    placeholder="Contoh: Pengajuan TA - Annel"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-field">
                <label class="form-label">"Deskripsi singkat"</label>
                <textarea
                    class="form-textarea"
                    placeholder="Ringkasan isi berkas atau catatan singkat untuk dosen"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-field">
                <label class="form-label">"File PDF"</label>
                <input
                    class="form-file"
                    type="file"
                    accept="application/pdf"
                    node_ref=file_input
                    required
                />
                <div class="form-help">
                    "Upload file dalam format PDF. Maksimal 10 MB (sesuai batas backend)."
                </div>
            </div>

            <div class="form-actions">
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Mengirim..." } else { "Kirim Submission" }}
                </button>
            </div>
        </form>
    }
}
