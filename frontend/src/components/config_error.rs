use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown instead of any redirect when the build configuration was rejected.
pub struct ConfigErrorPage;

impl Component for ConfigErrorPage {
    type Message = ();
    type Properties = ConfigErrorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfigErrorPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div style="padding: 24px; font-family: system-ui;">
                <h2>{"Configuração inválida"}</h2>
                <p>{"Este link não pode ser aberto no momento."}</p>
                <pre style="font-size: 12px; opacity: 0.7; white-space: pre-wrap;">
                    { ctx.props().message.clone() }
                </pre>
            </div>
        }
    }
}
