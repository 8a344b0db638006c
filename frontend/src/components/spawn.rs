use std::future::Future;

use common::tasks::TaskRegistry;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::Component;

/// Runs a request future on the browser's event loop and delivers its
/// message to the component, unless the registry aborted it first.
pub fn spawn_tracked<C, F>(tasks: &TaskRegistry, link: &Scope<C>, future: F)
where
    C: Component,
    F: Future<Output = C::Message> + 'static,
{
    let link = link.clone();
    let tracked = tasks.track(future);
    spawn_local(async move {
        if let Some(msg) = tracked.await {
            link.send_message(msg);
        }
    });
}
