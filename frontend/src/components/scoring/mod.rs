//! AI scoring widgets hosted next to the Missions and Predictions panels.

use yew::prelude::*;

use crate::components::panel::helpers::input_value;

mod collision;
mod mission_success;

pub use collision::CollisionScorer;
pub use mission_success::MissionSuccessScorer;

/// Labelled numeric input; blank means "let the scorer use its default".
fn number_input(
    id: &'static str,
    label: &'static str,
    value: &str,
    step: &'static str,
    placeholder: &'static str,
    oninput: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{ label }</label>
            <input
                {id}
                type="number"
                {step}
                {placeholder}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| oninput.emit(input_value(e)))}
            />
        </div>
    }
}

fn error_line(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="form-error" role="alert">{ message.to_string() }</p> },
        None => html! {},
    }
}
