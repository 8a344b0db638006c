use common::model::all_descriptors;
use yew::prelude::*;

use crate::workspace_grid::WorkspaceGrid;

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    /// Receives the key of the table the user picked.
    pub on_open: Callback<&'static str>,
}

/// Landing page: one card per managed table.
pub struct Overview;

impl Component for Overview {
    type Message = ();
    type Properties = OverviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Overview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_open = &ctx.props().on_open;

        html! {
            <section class="overview">
                <h1>{ "Space Operations Dashboard" }</h1>
                <WorkspaceGrid columns={4} class="overview-cards">
                    { for all_descriptors().into_iter().map(|descriptor| {
                        let key = descriptor.key;
                        let on_open = on_open.clone();
                        html! {
                            <button
                                class={classes!("card", "table-card", key)}
                                onclick={Callback::from(move |_: MouseEvent| on_open.emit(key))}
                            >
                                <h2>{ descriptor.title }</h2>
                                <p>{ descriptor.blurb }</p>
                            </button>
                        }
                    }) }
                </WorkspaceGrid>
            </section>
        }
    }
}
