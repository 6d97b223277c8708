use super::state::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notices: Vec<Notice>,
}

/// Transient toasts. Dismissal is scheduled by the shop.
#[function_component(Notifications)]
pub fn notifications(p: &Props) -> Html {
    html! {
      { for p.notices.iter().map(|notice| html! {
          <div
            key={notice.id}
            class={classes!("notification", notice.visible.then_some("show"))}
            role="status"
            aria-live="polite"
          >
            { &notice.message }
          </div>
      }) }
    }
}
