//! The accessibility widget: floating trigger, dimmed backdrop and the panel.
//!
//! State lives here; the panel is a pure view over [`A11ySettings`]. Every
//! change is written through to storage and reflected onto the page through a
//! single [`PresentationPlan`].
pub mod focus;
pub mod panel;

use crate::a11y::{self, PageNodes, ScrollGuard};
use crate::i18n;
use crate::storage::web_persistence;
use focus::{ReturnFocus, keydown_handler, use_document_keydown, use_focus_management};
use panel::{A11yPanel, accessibility_icon};
use ponpela_core::{A11yAction, A11ySettings, ActionOutcome, PresentationPlan, WidgetConfig};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(WidgetConfig::default)]
    pub config: WidgetConfig,
    /// Page nodes the plan is applied to. `None` renders the widget without
    /// touching the page.
    #[prop_or_default]
    pub nodes: Option<PageNodes>,
}

/// Live-region text announced after `action` produced `settings`.
#[must_use]
pub fn status_message(settings: &A11ySettings, action: A11yAction) -> String {
    let (label, state) = match action {
        A11yAction::FontUp | A11yAction::FontDown => {
            (i18n::t("a11y.sections.font"), settings.font_label())
        }
        A11yAction::Reset => return i18n::t("a11y.reset"),
        other => {
            let state = if settings.is_active(other) {
                i18n::t("a11y.on")
            } else {
                i18n::t("a11y.off")
            };
            (i18n::t(&format!("a11y.options.{}", other.as_str())), state)
        }
    };
    let mut vars = BTreeMap::new();
    vars.insert("label", label.as_str());
    vars.insert("state", state.as_str());
    i18n::tr("a11y.status", Some(&vars))
}

#[function_component(A11yWidget)]
pub fn a11y_widget(props: &Props) -> Html {
    let persistence = use_memo(props.config.storage_key.clone(), |key| {
        web_persistence(key)
    });
    let settings = {
        let persistence = persistence.clone();
        use_state(move || persistence.load_settings())
    };
    let open = use_state(|| false);
    let panel_ref = use_node_ref();
    let trigger_ref = use_node_ref();
    let return_focus: ReturnFocus = use_mut_ref(|| None);
    let scroll_guard = use_mut_ref(|| None::<ScrollGuard>);

    {
        let target = props.config.filter_target;
        use_effect_with(
            (*settings, props.nodes.clone()),
            move |(settings, nodes)| {
                if let Some(nodes) = nodes {
                    a11y::apply_plan(nodes, &PresentationPlan::from_settings(settings, target));
                }
                || ()
            },
        );
    }

    {
        let strategy = props.config.scroll_lock;
        let nodes = props.nodes.clone();
        let panel_ref = panel_ref.clone();
        let scroll_guard = scroll_guard.clone();
        use_effect_with(*open, move |open| {
            if *open && let Some(nodes) = nodes {
                let panel = panel_ref.cast::<web_sys::Element>();
                *scroll_guard.borrow_mut() = Some(ScrollGuard::engage(
                    strategy,
                    nodes.root,
                    nodes.body,
                    panel,
                ));
            }
            move || {
                scroll_guard.borrow_mut().take();
            }
        });
    }

    use_focus_management(*open, panel_ref.clone(), return_focus.clone());

    let close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };

    let on_escape = {
        let open = open.clone();
        let trigger_ref = trigger_ref.clone();
        let return_focus = return_focus.clone();
        Callback::from(move |()| {
            *return_focus.borrow_mut() = Some(trigger_ref.clone());
            open.set(false);
        })
    };
    use_document_keydown(*open, keydown_handler(panel_ref.clone(), on_escape));

    let on_action = {
        let settings = settings.clone();
        let open = open.clone();
        let persistence = persistence.clone();
        Callback::from(move |action: A11yAction| {
            let mut next = *settings;
            let outcome = next.apply(action);
            if let Err(e) = persistence.save_settings(&next) {
                log::error!("failed to save accessibility settings: {e}");
            }
            a11y::set_status(&status_message(&next, action));
            settings.set(next);
            if outcome == ActionOutcome::ClosePanel {
                open.set(false);
            }
        })
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let backdrop_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
      <div class="a11y-widget">
        <button
          type="button"
          class="a11y-btn"
          aria-label={i18n::t("a11y.open")}
          aria-expanded={(*open).to_string()}
          aria-haspopup="dialog"
          ref={trigger_ref}
          onclick={toggle}
        >
          { accessibility_icon() }
        </button>
        <div
          class={classes!("a11y-dim-overlay", (*open).then_some("open"))}
          aria-hidden="true"
          onclick={backdrop_click}
        />
        <A11yPanel
          settings={*settings}
          open={*open}
          panel_ref={panel_ref}
          on_action={on_action}
          on_close={close}
        />
      </div>
    }
}
