use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    /// Bumped by the parent to force a refetch of the collection, e.g. after
    /// a record was created from outside the panel.
    #[prop_or_default]
    pub reload: u32,
}
