//! Runtime state of an entity panel.

use std::rc::Rc;

use common::config::GatewayConfig;
use common::manager::EntityManager;
use common::model::Entity;
use common::tasks::TaskRegistry;
use yew::prelude::*;

use crate::gateway::HttpGateway;

pub struct EntityPanel<E: Entity> {
    /// Cached collection plus list/submit/search/delete state.
    pub manager: EntityManager<E>,

    /// Shared with every spawned request future.
    pub gateway: Rc<HttpGateway>,

    /// Requests in flight; aborted when the panel is destroyed.
    pub tasks: TaskRegistry,
}

impl<E: Entity> EntityPanel<E> {
    /// Reads the gateway configuration from the surrounding
    /// `ContextProvider`, falling back to the default origin.
    pub fn new(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<GatewayConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();

        Self {
            manager: EntityManager::new(),
            gateway: Rc::new(HttpGateway::new(config)),
            tasks: TaskRegistry::new(),
        }
    }
}
