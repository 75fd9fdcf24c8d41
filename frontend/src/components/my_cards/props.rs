use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MyCardsProps {
    /// Bumped by the parent whenever favorites were added elsewhere; any
    /// change triggers a reload of the list.
    #[prop_or_default]
    pub revision: u32,
}
