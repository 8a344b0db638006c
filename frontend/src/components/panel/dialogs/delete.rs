use common::model::Entity;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::panel::{EntityPanel, Msg};
use crate::tops_sheet::modal_sheet::ModalSheet;

/// Confirmation gate shown while a delete target is armed.
pub fn delete_dialog<E: Entity>(panel: &EntityPanel<E>, link: &Scope<EntityPanel<E>>) -> Html {
    let descriptor = E::DESCRIPTOR;
    let Some(id) = panel.manager.confirm.target() else {
        return html! {};
    };

    html! {
        <ModalSheet
            open={true}
            title={format!("Delete {}", descriptor.singular)}
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <p>{ format!("Are you sure you want to delete {} {}? This cannot be undone.", descriptor.singular.to_lowercase(), id) }</p>
            <div class="form-actions">
                <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>{ "Cancel" }</button>
                <button class="btn danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>{ "Delete" }</button>
            </div>
        </ModalSheet>
    }
}
