use std::rc::Rc;

use common::config::GatewayConfig;
use common::display::NOT_AVAILABLE;
use common::error::ApiError;
use common::model::satellite::ORBIT_TYPES;
use common::model::{RecordId, Satellite};
use common::requests::CollisionResponse;
use common::scoring::{
    satellite_choices, save_collision_prediction, score_collision, CollisionForm, ScoringState,
};
use common::tasks::TaskRegistry;
use yew::prelude::*;

use super::{error_line, number_input};
use crate::components::panel::helpers::select_value;
use crate::components::spawn::spawn_tracked;
use crate::components::toast::show_toast;
use crate::gateway::HttpGateway;

#[derive(Properties, PartialEq)]
pub struct CollisionScorerProps {
    /// Fired after a score has been saved as a prediction record.
    pub on_saved: Callback<()>,
}

pub enum Msg {
    SatellitesLoaded(Result<Vec<Satellite>, ApiError>),
    Edit(fn(&mut CollisionForm, String), String),
    Score,
    Scored(Result<(RecordId, CollisionResponse), ApiError>),
    Save,
    Saved(Result<(), ApiError>),
}

/// Collision risk and remaining lifespan for one satellite, with the
/// option to keep the answer as a prediction record.
pub struct CollisionScorer {
    form: CollisionForm,
    /// Latest score, with the satellite it was computed for.
    score: ScoringState<(RecordId, CollisionResponse)>,
    saving: ScoringState<()>,
    satellites: Vec<Satellite>,
    satellites_error: Option<String>,
    gateway: Rc<HttpGateway>,
    tasks: TaskRegistry,
}

impl Component for CollisionScorer {
    type Message = Msg;
    type Properties = CollisionScorerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<GatewayConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        Self {
            form: CollisionForm::default(),
            score: ScoringState::default(),
            saving: ScoringState::default(),
            satellites: Vec::new(),
            satellites_error: None,
            gateway: Rc::new(HttpGateway::new(config)),
            tasks: TaskRegistry::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let gateway = self.gateway.clone();
            spawn_tracked(&self.tasks, ctx.link(), async move {
                Msg::SatellitesLoaded(satellite_choices(&*gateway).await)
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SatellitesLoaded(Ok(satellites)) => {
                self.satellites = satellites;
                self.satellites_error = None;
                true
            }
            Msg::SatellitesLoaded(Err(err)) => {
                self.satellites_error = Some(format!("Failed to load satellites: {}", err));
                true
            }
            Msg::Edit(apply, value) => {
                apply(&mut self.form, value);
                true
            }
            Msg::Score => {
                if self.score.in_progress {
                    return false;
                }
                let request = match self.form.to_request() {
                    Ok(request) => request,
                    Err(err) => {
                        self.score.reject(err);
                        return true;
                    }
                };
                self.score.begin();
                let gateway = self.gateway.clone();
                spawn_tracked(&self.tasks, ctx.link(), async move {
                    Msg::Scored(score_collision(&*gateway, &request).await)
                });
                true
            }
            Msg::Scored(outcome) => {
                let recorded = match &outcome {
                    Ok((_, score)) => score.saved_prediction_id.is_some(),
                    Err(err) => {
                        log::error!("collision scoring failed: {}", err);
                        false
                    }
                };
                self.score.finish(outcome);
                if recorded {
                    ctx.props().on_saved.emit(());
                }
                true
            }
            Msg::Save => {
                if self.saving.in_progress {
                    return false;
                }
                let Some((satellite_id, score)) = self.score.result.clone() else {
                    self.saving.reject("No prediction to save or satellite not selected.");
                    return true;
                };
                self.saving.begin();
                let gateway = self.gateway.clone();
                spawn_tracked(&self.tasks, ctx.link(), async move {
                    Msg::Saved(save_collision_prediction(&*gateway, satellite_id, &score).await)
                });
                true
            }
            Msg::Saved(outcome) => {
                let succeeded = outcome.is_ok();
                self.saving.finish(outcome);
                if succeeded {
                    self.score = ScoringState::default();
                    self.form.satellite_id.clear();
                    show_toast("Prediction saved successfully!");
                    ctx.props().on_saved.emit(());
                }
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
            <section class="scorer collision">
                <h2>{ "Predict Satellite Collision Risk" }</h2>
                { error_line(self.satellites_error.as_deref()) }
                <form {onsubmit}>
                    <div class="form-field">
                        <label for="collision_satellite">{ "Satellite" }</label>
                        <select
                            id="collision_satellite"
                            onchange={link.callback(|e: Event| Msg::Edit(|form, value| form.satellite_id = value, select_value(e)))}
                        >
                            <option value="" selected={form.satellite_id.is_empty()}>{ "Select a satellite" }</option>
                            { for self.satellites.iter().filter_map(|satellite| {
                                let id = satellite.satellite_id?.to_string();
                                let selected = form.satellite_id == id;
                                Some(html! {
                                    <option value={id.clone()} {selected}>
                                        { format!("{} (ID {})", satellite.satellite_name, id) }
                                    </option>
                                })
                            }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="collision_orbit">{ "Orbit Type" }</label>
                        <select
                            id="collision_orbit"
                            onchange={link.callback(|e: Event| Msg::Edit(|form, value| form.orbit_type = value, select_value(e)))}
                        >
                            <option value="" selected={form.orbit_type.is_empty()}>{ "Select orbit type" }</option>
                            { for ORBIT_TYPES.iter().map(|orbit| html! {
                                <option value={*orbit} selected={form.orbit_type == *orbit}>{ *orbit }</option>
                            }) }
                        </select>
                    </div>
                    { number_input("launch_year", "Launch Year", &form.launch_year, "1", "2020",
                        link.callback(|v| Msg::Edit(|form, value| form.launch_year = value, v))) }
                    { number_input("age_at_prediction", "Age at Prediction (months)", &form.age_at_prediction_months, "1", "24",
                        link.callback(|v| Msg::Edit(|form, value| form.age_at_prediction_months = value, v))) }
                    { number_input("maintenance_cost", "Maintenance Cost (USD/year)", &form.maintenance_cost_usd_per_year, "any", "20000",
                        link.callback(|v| Msg::Edit(|form, value| form.maintenance_cost_usd_per_year = value, v))) }
                    { number_input("component_health_score", "Component Health Score (0.0-1.0)", &form.component_health_score, "0.01", "0.8",
                        link.callback(|v| Msg::Edit(|form, value| form.component_health_score = value, v))) }
                    <button type="submit" class="btn primary" disabled={self.score.in_progress}>
                        { if self.score.in_progress { "Predicting..." } else { "Predict Risk" } }
                    </button>
                </form>
                { error_line(self.score.error.as_deref()) }
                { self.build_result(link) }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.abort_all();
    }
}

impl CollisionScorer {
    fn build_result(&self, link: &yew::html::Scope<Self>) -> Html {
        let Some((satellite_id, result)) = &self.score.result else {
            return html! {};
        };
        let saved_as = result
            .saved_prediction_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        html! {
            <div class="score-result">
                <p>{ "Satellite: " }<strong>{ satellite_id.to_string() }</strong></p>
                <p>{ "Collision risk: " }<strong>{ result.collision_risk.clone() }</strong></p>
                <p>{ "Predicted lifespan: " }<strong>{ format!("{} months", result.lifespan_months) }</strong></p>
                <p class="muted">{ format!("Recorded by scorer as prediction {}", saved_as) }</p>
                <button class="btn" disabled={self.saving.in_progress} onclick={link.callback(|_| Msg::Save)}>
                    { if self.saving.in_progress { "Saving..." } else { "Save Prediction" } }
                </button>
                { error_line(self.saving.error.as_deref()) }
            </div>
        }
    }
}
