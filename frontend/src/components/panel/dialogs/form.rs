use common::model::descriptor::FieldSpec;
use common::model::Entity;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::panel::helpers::{input_step, input_type, input_value, select_value};
use crate::components::panel::{EntityPanel, Msg};
use crate::tops_sheet::modal_sheet::ModalSheet;

/// Create/edit modal over the manager's draft.
pub fn form_dialog<E: Entity>(panel: &EntityPanel<E>, link: &Scope<EntityPanel<E>>) -> Html {
    let descriptor = E::DESCRIPTOR;
    let manager = &panel.manager;
    let form = &manager.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <ModalSheet
            open={form.open}
            title={form.title(descriptor)}
            on_close={link.callback(|_| Msg::CloseForm)}
        >
            <form class="entity-form" {onsubmit}>
                { for descriptor.fields.iter().map(|spec| build_field(spec, form.draft.value(spec.name), link)) }
                {
                    match &manager.submit.error {
                        Some(error) => html! { <p class="form-error" role="alert">{ error.clone() }</p> },
                        None => html! {},
                    }
                }
                <div class="form-actions">
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseForm)}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn primary" disabled={manager.submit.in_progress}>
                        { form.submit_label(manager.submit.in_progress) }
                    </button>
                </div>
            </form>
        </ModalSheet>
    }
}

fn build_field<E: Entity>(spec: &'static FieldSpec, value: &str, link: &Scope<EntityPanel<E>>) -> Html {
    let id = format!("field-{}", spec.name);
    let name = spec.name;

    let oninput = link.callback(move |e: InputEvent| Msg::FieldChanged(name, input_value(e)));
    let control = if spec.choices.is_empty() {
        html! {
            <input
                id={id.clone()}
                name={name}
                type={input_type(spec.kind)}
                step={input_step(spec.kind)}
                required={spec.required}
                value={value.to_string()}
                {oninput}
            />
        }
    } else if spec.free_text {
        let list_id = format!("{}-suggestions", id);
        html! {
            <>
                <input
                    id={id.clone()}
                    name={name}
                    type="text"
                    list={list_id.clone()}
                    required={spec.required}
                    value={value.to_string()}
                    {oninput}
                />
                <datalist id={list_id}>
                    { for spec.choices.iter().map(|choice| html! { <option value={*choice} /> }) }
                </datalist>
            </>
        }
    } else {
        html! {
            <select
                id={id.clone()}
                name={name}
                required={spec.required}
                onchange={link.callback(move |e: Event| Msg::FieldChanged(name, select_value(e)))}
            >
                <option value="" selected={value.is_empty()}>{ format!("Select {}", spec.label) }</option>
                { for spec.options_for(value).into_iter().map(|choice| html! {
                    <option value={choice.to_string()} selected={value == choice}>{ choice.to_string() }</option>
                }) }
            </select>
        }
    };

    html! {
        <div class="form-field">
            <label for={id}>
                { spec.label }
                { if spec.required { html! { <span class="required">{ " *" }</span> } } else { html! {} } }
            </label>
            { control }
        </div>
    }
}
