//! "My collection" panel: lists the favorites from `GET /my-cards` and hosts
//! the form used both to create (`POST`) and to edit (`PUT`) a card.
//!
//! The list is loaded on first render and reloaded after every successful
//! save or delete, and whenever the parent bumps the `revision` prop.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MyCardsProps;
pub use state::MyCardsComponent;

impl Component for MyCardsComponent {
    type Message = Msg;
    type Properties = MyCardsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MyCardsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().revision != old_props.revision {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
