use crate::components::my_cards::MyCardsComponent;
use crate::components::search::SearchComponent;
use common::model::card::CardRecord;
use yew::{html, Component, Context, Html};

/// Root component: the search panel on top, the favorites below.
///
/// Saving a looked-up card bumps `favorites_revision`, which makes the
/// favorites panel reload its list.
pub struct App {
    favorites_revision: u32,
}

pub enum Msg {
    FavoriteAdded(CardRecord),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            favorites_revision: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FavoriteAdded(_) => {
                self.favorites_revision += 1;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container py-4">
                <h1 class="mb-4">{"Card Catalog"}</h1>
                <SearchComponent on_saved={ctx.link().callback(Msg::FavoriteAdded)} />
                <hr class="my-4" />
                <MyCardsComponent revision={self.favorites_revision} />
            </div>
        }
    }
}
