//! User-facing copy for the redirect page (Portuguese, like the rest of the UI).

use common::model::client::InAppBrowser;
use common::model::status::Status;

use super::state::RedirectPage;

/// One-line description of what the page is doing right now.
pub fn status_message(page: &RedirectPage) -> &'static str {
    if page.awaiting_tap() {
        return "Toque no botão abaixo para abrir o aplicativo.";
    }
    match page.status() {
        Status::OpeningApp | Status::Trying => "Tentando abrir o aplicativo.",
        Status::Idle | Status::Fallback => "Abrindo o pagamento web.",
        Status::Invalid => "Link inválido.",
    }
}

/// Hint for embedded browsers that often refuse to hand links to the app.
pub fn in_app_hint(browser: InAppBrowser) -> String {
    format!(
        "Você está no navegador do {}. Se o aplicativo não abrir, use o menu (⋯) e \
         escolha \"Abrir no navegador\".",
        browser.display_name()
    )
}
