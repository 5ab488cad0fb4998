//! Not-found page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered for any unknown route, regardless of authentication state.
/// No redirect; just a way back to the landing route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="main-area">
            <div class="card-soft">
                <h2>"Halaman tidak ditemukan"</h2>
                <p class="text-muted">
                    "Pastikan URL yang kamu akses benar, atau kembali ke dashboard."
                </p>
                <A href="/" attr:class="btn btn-primary">
                    "Kembali ke beranda"
                </A>
            </div>
        </div>
    }
}
