//! Generic CRUD panel: one instance per entity type.
//!
//! The component wires `EntityManager` into Yew. `update` turns user
//! messages into manager calls and spawns the resulting requests; `view`
//! renders the summary tiles, the search box, the table and both dialogs.
//! Requests are tracked so that tearing the panel down aborts them.

use common::model::Entity;
use yew::prelude::*;

mod dialogs;
pub(crate) mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PanelProps;
pub use state::EntityPanel;

impl<E: Entity> Component for EntityPanel<E> {
    type Message = Msg<E>;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        EntityPanel::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().reload != old_props.reload {
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.abort_all();
    }
}
