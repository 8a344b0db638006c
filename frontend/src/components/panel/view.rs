//! View rendering for the entity panel.
//!
//! Layout, top to bottom: header with the add button, summary tiles and
//! breakdowns, the recent-activity strip (tracking only), the search box
//! and its result, then the table. The form and delete dialogs render
//! nothing while closed.

use common::display::{cell_text, NOT_AVAILABLE};
use common::manager::{PanelStatus, SearchOutcome};
use common::model::descriptor::RecentSpec;
use common::model::Entity;
use common::summary::{Breakdown, Tile};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::{delete_dialog, form_dialog};
use super::helpers::{format_count, input_value};
use super::messages::Msg;
use super::state::EntityPanel;
use crate::workspace_grid::WorkspaceGrid;

pub fn view<E: Entity>(panel: &EntityPanel<E>, ctx: &Context<EntityPanel<E>>) -> Html {
    let link = ctx.link();
    let descriptor = E::DESCRIPTOR;
    let manager = &panel.manager;

    let body = match manager.status() {
        PanelStatus::Loading => html! {
            <div class="panel-status loading">{ format!("Loading {}...", descriptor.title.to_lowercase()) }</div>
        },
        PanelStatus::Unavailable(message) => html! {
            <div class="panel-status error" role="alert">{ message.to_string() }</div>
        },
        PanelStatus::Ready => html! {
            <>
                { build_error_banner(manager.list.error.as_deref()) }
                { build_summary(panel) }
                { build_recent(panel) }
                { build_search(panel, link) }
                { build_table(panel, link) }
            </>
        },
    };

    html! {
        <section class={classes!("entity-panel", descriptor.key)}>
            <header class="panel-header">
                <h1>{ descriptor.title }</h1>
                <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { format!("Add New {}", descriptor.singular) }
                </button>
            </header>
            { body }
            { form_dialog(panel, link) }
            { delete_dialog(panel, link) }
        </section>
    }
}

fn build_error_banner(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <div class="banner error" role="alert">{ message.to_string() }</div> },
        None => html! {},
    }
}

fn build_summary<E: Entity>(panel: &EntityPanel<E>) -> Html {
    let summary = panel.manager.summary();
    let tiles: Vec<&Tile> = std::iter::once(&summary.total).chain(summary.tiles.iter()).collect();

    html! {
        <div class="summary">
            <h2>{ summary.heading }</h2>
            <WorkspaceGrid columns={tiles.len()} class="summary-tiles">
                { for tiles.into_iter().map(build_tile) }
            </WorkspaceGrid>
            { for summary.breakdowns.iter().map(build_breakdown) }
        </div>
    }
}

fn build_tile(tile: &Tile) -> Html {
    html! {
        <div class={classes!("tile", tile.accent)}>
            <span class="tile-label">{ tile.label }</span>
            <span class="tile-count">{ format_count(tile.count) }</span>
        </div>
    }
}

fn build_breakdown(breakdown: &Breakdown) -> Html {
    html! {
        <div class="breakdown">
            <h3>{ breakdown.label }</h3>
            <ul>
                { for breakdown.groups.iter().map(|(value, count)| html! {
                    <li><span class="group">{ value.clone() }</span>{": "}<span class="count">{ format_count(*count) }</span></li>
                }) }
            </ul>
        </div>
    }
}

fn build_recent<E: Entity>(panel: &EntityPanel<E>) -> Html {
    let Some(spec) = &E::DESCRIPTOR.recent else {
        return html! {};
    };
    let recent = panel.manager.recent();
    if recent.is_empty() {
        return html! {};
    }

    html! {
        <div class="recent">
            <h2>{ spec.heading }</h2>
            <WorkspaceGrid columns={spec.count} class="recent-cards">
                { for recent.into_iter().map(|record| build_recent_card(record, spec)) }
            </WorkspaceGrid>
        </div>
    }
}

fn build_recent_card<E: Entity>(record: &E, spec: &RecentSpec) -> Html {
    let columns = E::DESCRIPTOR.columns.iter().filter(|c| c.field != spec.timestamp_field);
    let stamp = E::DESCRIPTOR
        .columns
        .iter()
        .find(|c| c.field == spec.timestamp_field)
        .map(|c| cell_text(record, c))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    html! {
        <div class="card">
            <div class="card-stamp">{ stamp }</div>
            <dl>
                { for columns.map(|column| html! {
                    <>
                        <dt>{ column.label }</dt>
                        <dd>{ cell_text(record, column) }</dd>
                    </>
                }) }
            </dl>
        </div>
    }
}

fn build_search<E: Entity>(panel: &EntityPanel<E>, link: &Scope<EntityPanel<E>>) -> Html {
    let descriptor = E::DESCRIPTOR;
    let search = &panel.manager.search;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Search
    });

    let outcome = match &search.outcome {
        SearchOutcome::Idle => html! {},
        SearchOutcome::NotFound => html! {
            <p class="search-result not-found">{ format!("{} not found.", descriptor.singular) }</p>
        },
        SearchOutcome::Failed(message) => html! {
            <p class="search-result error" role="alert">{ message.clone() }</p>
        },
        SearchOutcome::Found(record) => html! {
            <div class="search-result found">
                <dl>
                    { for descriptor.columns.iter().map(|column| html! {
                        <>
                            <dt>{ column.label }</dt>
                            <dd>{ cell_text(record, column) }</dd>
                        </>
                    }) }
                </dl>
            </div>
        },
    };

    html! {
        <div class="search">
            <form {onsubmit}>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder={format!("Search {} by ID", descriptor.singular)}
                    value={search.query.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SearchInput(input_value(e)))}
                />
                <button class="btn" type="submit" disabled={search.in_progress}>
                    { if search.in_progress { "Searching..." } else { "Search" } }
                </button>
            </form>
            { outcome }
        </div>
    }
}

fn build_table<E: Entity>(panel: &EntityPanel<E>, link: &Scope<EntityPanel<E>>) -> Html {
    let descriptor = E::DESCRIPTOR;
    let manager = &panel.manager;

    if manager.records().is_empty() {
        return html! {
            <p class="empty">{ format!("No {} found.", descriptor.title.to_lowercase()) }</p>
        };
    }

    html! {
        <>
            { build_error_banner(manager.remove.error.as_deref()) }
            <table class="entity-table">
                <thead>
                    <tr>
                        { for descriptor.columns.iter().map(|c| html! { <th>{ c.label }</th> }) }
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for manager.preview().iter().map(|record| build_row(record, link)) }
                </tbody>
            </table>
            <p class="table-footer">
                { format!("Showing {} of {}", manager.preview().len(), format_count(manager.records().len())) }
            </p>
        </>
    }
}

fn build_row<E: Entity>(record: &E, link: &Scope<EntityPanel<E>>) -> Html {
    let on_edit = {
        let record = record.clone();
        link.callback(move |_| Msg::OpenEdit(record.clone()))
    };
    let on_delete = record.id().map(|id| link.callback(move |_| Msg::RequestDelete(id)));

    html! {
        <tr>
            { for E::DESCRIPTOR.columns.iter().map(|column| html! { <td>{ cell_text(record, column) }</td> }) }
            <td class="actions">
                <button class="btn" onclick={on_edit}>{ "Edit" }</button>
                <button class="btn danger" disabled={on_delete.is_none()} onclick={on_delete}>{ "Delete" }</button>
            </td>
        </tr>
    }
}
