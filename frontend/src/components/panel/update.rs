//! Update function for the entity panel.
//!
//! Each user message is forwarded to the manager; when the manager hands
//! back a request, the matching `ops` call is spawned and its result comes
//! back as a completion message. Returns whether the view should re-render.

use common::manager::ops;
use common::model::Entity;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::EntityPanel;
use crate::components::spawn::spawn_tracked;

pub fn update<E: Entity>(panel: &mut EntityPanel<E>, ctx: &Context<EntityPanel<E>>, msg: Msg<E>) -> bool {
    let descriptor = E::DESCRIPTOR;
    let manager = &mut panel.manager;

    match msg {
        Msg::Load => {
            manager.begin_load();
            let gateway = panel.gateway.clone();
            spawn_tracked(&panel.tasks, ctx.link(), async move {
                Msg::Loaded(ops::fetch_all::<E, _>(&*gateway).await)
            });
            true
        }
        Msg::Loaded(outcome) => {
            manager.finish_load(outcome);
            true
        }

        Msg::OpenCreate => {
            manager.open_create();
            true
        }
        Msg::OpenEdit(record) => {
            manager.open_edit(&record);
            true
        }
        Msg::CloseForm => {
            manager.close_form();
            true
        }
        Msg::FieldChanged(field, value) => {
            manager.change_field(field, value);
            true
        }
        Msg::Submit => {
            let Some(request) = manager.begin_submit() else {
                return true;
            };
            let gateway = panel.gateway.clone();
            spawn_tracked(&panel.tasks, ctx.link(), async move {
                Msg::Submitted(ops::save::<E, _>(&*gateway, request).await)
            });
            true
        }
        Msg::Submitted(outcome) => {
            if let Some(kind) = manager.finish_submit(outcome) {
                show_toast(&format!("{} {}.", descriptor.singular, kind.verb()));
            }
            true
        }

        Msg::RequestDelete(id) => {
            manager.request_delete(id);
            true
        }
        Msg::CancelDelete => {
            manager.cancel_delete();
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = manager.confirm_delete() else {
                return true;
            };
            let gateway = panel.gateway.clone();
            spawn_tracked(&panel.tasks, ctx.link(), async move {
                Msg::Deleted(id, ops::remove::<E, _>(&*gateway, id).await)
            });
            true
        }
        Msg::Deleted(id, outcome) => {
            let succeeded = outcome.is_ok();
            manager.finish_delete(id, outcome);
            if succeeded {
                show_toast(&format!("{} {} deleted.", descriptor.singular, id));
            }
            true
        }

        Msg::SearchInput(query) => {
            manager.set_search_query(query);
            false
        }
        Msg::Search => {
            let Some(id) = manager.begin_search() else {
                return true;
            };
            let gateway = panel.gateway.clone();
            spawn_tracked(&panel.tasks, ctx.link(), async move {
                Msg::Searched(ops::find::<E, _>(&*gateway, id).await)
            });
            true
        }
        Msg::Searched(outcome) => {
            manager.finish_search(outcome);
            true
        }
    }
}
