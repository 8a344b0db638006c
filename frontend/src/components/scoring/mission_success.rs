use std::rc::Rc;

use common::config::GatewayConfig;
use common::display::percent;
use common::error::ApiError;
use common::requests::MissionSuccessResponse;
use common::scoring::{score_mission, MissionSuccessForm, ScoringState};
use common::tasks::TaskRegistry;
use yew::prelude::*;

use super::{error_line, number_input};
use crate::components::spawn::spawn_tracked;
use crate::gateway::HttpGateway;

pub enum Msg {
    Edit(fn(&mut MissionSuccessForm, String), String),
    Score,
    Scored(Result<MissionSuccessResponse, ApiError>),
}

/// Mission success probability from payload mass and launch parameters.
pub struct MissionSuccessScorer {
    form: MissionSuccessForm,
    state: ScoringState<MissionSuccessResponse>,
    gateway: Rc<HttpGateway>,
    tasks: TaskRegistry,
}

impl Component for MissionSuccessScorer {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<GatewayConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        Self {
            form: MissionSuccessForm::default(),
            state: ScoringState::default(),
            gateway: Rc::new(HttpGateway::new(config)),
            tasks: TaskRegistry::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(apply, value) => {
                apply(&mut self.form, value);
                false
            }
            Msg::Score => {
                if self.state.in_progress {
                    return false;
                }
                let request = match self.form.to_request() {
                    Ok(request) => request,
                    Err(err) => {
                        self.state.reject(err);
                        return true;
                    }
                };
                self.state.begin();
                let gateway = self.gateway.clone();
                spawn_tracked(&self.tasks, ctx.link(), async move {
                    Msg::Scored(score_mission(&*gateway, &request).await)
                });
                true
            }
            Msg::Scored(outcome) => {
                if let Err(err) = &outcome {
                    log::error!("mission success scoring failed: {}", err);
                }
                self.state.finish(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Score
        });

        html! {
            <section class="scorer mission-success">
                <h2>{ "Predict Mission Success" }</h2>
                <form {onsubmit}>
                    { number_input("payload_mass", "Payload Mass (kg)", &form.payload_mass_kg, "any", "e.g. 1500",
                        link.callback(|v| Msg::Edit(|form, value| form.payload_mass_kg = value, v))) }
                    { number_input("mission_duration", "Mission Duration (days)", &form.mission_duration_days, "any", "300",
                        link.callback(|v| Msg::Edit(|form, value| form.mission_duration_days = value, v))) }
                    { number_input("launch_vehicle_reliability", "Launch Vehicle Reliability (0.0-1.0)",
                        &form.launch_vehicle_reliability, "0.01", "0.95",
                        link.callback(|v| Msg::Edit(|form, value| form.launch_vehicle_reliability = value, v))) }
                    { number_input("num_stages", "Number of Stages", &form.num_stages, "1", "2",
                        link.callback(|v| Msg::Edit(|form, value| form.num_stages = value, v))) }
                    <button type="submit" class="btn primary" disabled={self.state.in_progress}>
                        { if self.state.in_progress { "Predicting..." } else { "Predict Success" } }
                    </button>
                </form>
                { error_line(self.state.error.as_deref()) }
                {
                    match &self.state.result {
                        Some(result) => html! {
                            <p class="score-result">
                                { "Predicted success chance: " }
                                <strong>{ percent(result.mission_success_chance) }</strong>
                            </p>
                        },
                        None => html! {},
                    }
                }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.abort_all();
    }
}
