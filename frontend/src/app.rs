use common::config::GatewayConfig;
use common::model::{
    all_descriptors, DebrisRecord, Entity, GroundStation, LogRecord, Mission, PredictionRecord,
    Satellite, TrackingRecord,
};
use yew::{classes, html, Component, Context, ContextProvider, Html, MouseEvent};

use crate::components::overview::Overview;
use crate::components::panel::EntityPanel;
use crate::components::scoring::{CollisionScorer, MissionSuccessScorer};
use crate::config;

pub enum Msg {
    /// `None` shows the overview; otherwise the key of a table.
    Navigate(Option<&'static str>),
    PredictionSaved,
}

pub struct App {
    config: GatewayConfig,
    page: Option<&'static str>,
    /// Bumped whenever a prediction is created outside the predictions panel.
    predictions_reload: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: config::gateway_config(),
            page: None,
            predictions_reload: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                log::debug!("navigate to {}", page.unwrap_or("overview"));
                self.page = page;
                true
            }
            Msg::PredictionSaved => {
                self.predictions_reload = self.predictions_reload.wrapping_add(1);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<GatewayConfig> context={self.config.clone()}>
                { self.build_nav(ctx) }
                <main class="page">
                    { self.build_page(ctx) }
                </main>
            </ContextProvider<GatewayConfig>>
        }
    }
}

impl App {
    fn build_nav(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let entry = |page: Option<&'static str>, label: &'static str| {
            let active = self.page == page;
            html! {
                <li>
                    <a
                        href="#"
                        class={classes!("nav-link", active.then_some("active"))}
                        onclick={link.callback(move |e: MouseEvent| {
                            e.prevent_default();
                            Msg::Navigate(page)
                        })}
                    >
                        { label }
                    </a>
                </li>
            }
        };

        html! {
            <nav class="navbar">
                <ul>
                    { entry(None, "Overview") }
                    { for all_descriptors().into_iter().map(|d| entry(Some(d.key), d.title)) }
                </ul>
            </nav>
        }
    }

    fn build_page(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(key) = self.page else {
            return html! { <Overview on_open={link.callback(|key| Msg::Navigate(Some(key)))} /> };
        };

        match key {
            k if k == Mission::DESCRIPTOR.key => html! {
                <>
                    <EntityPanel<Mission> />
                    <MissionSuccessScorer />
                </>
            },
            k if k == Satellite::DESCRIPTOR.key => html! { <EntityPanel<Satellite> /> },
            k if k == TrackingRecord::DESCRIPTOR.key => html! { <EntityPanel<TrackingRecord> /> },
            k if k == GroundStation::DESCRIPTOR.key => html! { <EntityPanel<GroundStation> /> },
            k if k == DebrisRecord::DESCRIPTOR.key => html! { <EntityPanel<DebrisRecord> /> },
            k if k == PredictionRecord::DESCRIPTOR.key => html! {
                <>
                    <EntityPanel<PredictionRecord> reload={self.predictions_reload} />
                    <CollisionScorer on_saved={link.callback(|_| Msg::PredictionSaved)} />
                </>
            },
            k if k == LogRecord::DESCRIPTOR.key => html! { <EntityPanel<LogRecord> /> },
            _ => {
                log::warn!("unknown page {}", key);
                html! {}
            }
        }
    }
}
