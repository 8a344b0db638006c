use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    pub columns: usize,
    #[prop_or_default]
    pub class: &'static str,
    pub children: Children,
}

/// Equal-width grid used for summary tiles and card strips.
pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 1rem;",
            props.columns.max(1)
        );

        html! {
            <div class={props.class} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
