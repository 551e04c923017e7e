//! View rendering for the redirect page.
//!
//! Two layouts: the static "invalid link" explanation, and the redirect
//! notice with a manual "open app" button, a direct web payment link, and
//! the resolved URLs for support.

use yew::prelude::*;

use super::helpers::{in_app_hint, status_message};
use super::messages::Msg;
use super::state::RedirectPage;

const PAGE_STYLE: &str = "padding: 24px; font-family: system-ui; max-width: 520px;";
const BUTTON_STYLE: &str = "display: block; width: 100%; margin: 0 0 12px; padding: 12px; \
     font-size: 16px; border: none; border-radius: 6px; background: #1976d2; color: #fff;";

pub fn view(page: &RedirectPage, ctx: &Context<RedirectPage>) -> Html {
    if page.is_invalid() {
        return invalid_link_view();
    }
    redirect_view(page, ctx)
}

fn invalid_link_view() -> Html {
    html! {
        <div style="padding: 24px; font-family: system-ui;">
            <h2>{"Link inválido"}</h2>
            <p>{"Faltou stationId ou chargerBoxId."}</p>
            <p>
                {"Exemplo: "}<code>{"/r/956/SEU-UUID"}</code>{" ou "}
                <code>{"/q?stationId=956&chargerBoxId=SEU-UUID"}</code>
            </p>
        </div>
    }
}

fn redirect_view(page: &RedirectPage, ctx: &Context<RedirectPage>) -> Html {
    let link = ctx.link();
    let (app_url, web_url) = page
        .destinations()
        .map(|d| (d.app_url.clone(), d.web_url.clone()))
        .unwrap_or_default();

    html! {
        <div style={PAGE_STYLE} data-status={page.status().as_str()}>
            <h2 style="margin: 0 0 8px;">{"Redirecionando…"}</h2>
            <p style="margin: 0 0 16px; opacity: 0.8;">{ status_message(page) }</p>

            {
                if page.offers_app() {
                    html! {
                        <button
                            style={BUTTON_STYLE}
                            onclick={link.callback(|_: MouseEvent| Msg::OpenApp)}
                        >
                            {"Abrir no aplicativo"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            <a href={web_url.clone()}>{"Abrir pagamento web agora"}</a>

            {
                match page.client.in_app_browser {
                    Some(browser) => html! {
                        <p style="margin-top: 16px; font-size: 14px;">{ in_app_hint(browser) }</p>
                    },
                    None => html! {},
                }
            }

            <div style="margin-top: 16px; font-size: 12px; opacity: 0.7;">
                <div><strong>{"App:"}</strong>{" "}{ app_url }</div>
                <div><strong>{"Web:"}</strong>{" "}{ web_url }</div>
            </div>
        </div>
    }
}
