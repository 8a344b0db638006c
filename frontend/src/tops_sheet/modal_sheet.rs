use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Blocking overlay with a centered sheet. Renders nothing while closed.
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    /// Fired by the close button and by clicks on the backdrop.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let title_id = format!("{}-title", self.id);

        html! {
            <div class="modal-backdrop" onclick={on_backdrop}>
                <div
                    class="modal-sheet show"
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="modal-header">
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        <button class="modal-close" title="Close" onclick={on_close}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
