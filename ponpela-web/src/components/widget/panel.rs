use crate::i18n;
use ponpela_core::{A11yAction, A11ySettings, ContrastMode, TextAlign};
use yew::prelude::*;

/// Accessibility glyph shared by the trigger button and the panel header.
pub const ICON_PATH: &str = "M19 13v-2c-1.54.02-3.09-.75-4.07-1.83l-1.29-1.43c-.17-.19-.38-.34-.61-.45-.01 0-.01-.01-.02-.01H13c-.35-.2-.75-.3-1.19-.26C10.76 7.11 10 8.04 10 9.09V15c0 1.1.9 2 2 2h5v5h2v-5.5c0-1.1-.9-2-2-2h-3v-3.45c1.29 1.07 3.25 1.94 5 1.95zm-6.17 5c-.41 1.16-1.52 2-2.83 2-1.66 0-3-1.34-3-3 0-1.31.84-2.41 2-2.83V12.1c-2.28.46-4 2.48-4 4.9 0 2.76 2.24 5 5 5 2.42 0 4.44-1.72 4.9-4h-2.07z";

#[must_use]
pub fn accessibility_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" aria-hidden="true" focusable="false">
            <circle cx="12" cy="4" r="2" />
            <path d={ICON_PATH} />
        </svg>
    }
}

const fn option_icon(action: A11yAction) -> &'static str {
    match action {
        A11yAction::Contrast(ContrastMode::High) => "🔲",
        A11yAction::Contrast(_) => "🔄",
        A11yAction::Grayscale => "⚫",
        A11yAction::Links => "🔗",
        A11yAction::ReadableFont => "Aa",
        A11yAction::LineHeight => "↕",
        A11yAction::LetterSpacing => "↔",
        A11yAction::Animations => "⏸",
        A11yAction::Cursor => "🖱️",
        A11yAction::Align(TextAlign::Right) => "⫸",
        A11yAction::Align(TextAlign::Left) => "⫷",
        A11yAction::Align(_) => "☰",
        A11yAction::FontUp | A11yAction::FontDown | A11yAction::Reset => "",
    }
}

/// Grid sections in panel order; each holds four options.
const SECTIONS: [&str; 3] = ["display", "readability", "navigation"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: A11ySettings,
    pub open: bool,
    pub panel_ref: NodeRef,
    pub on_action: Callback<A11yAction>,
    pub on_close: Callback<()>,
}

fn option_button(settings: &A11ySettings, action: A11yAction, on_action: &Callback<A11yAction>) -> Html {
    let active = settings.is_active(action);
    let onclick = {
        let cb = on_action.clone();
        Callback::from(move |_| cb.emit(action))
    };
    html! {
        <button
            type="button"
            class={classes!("a11y-option", active.then_some("active"))}
            data-action={action.as_str()}
            aria-pressed={active.to_string()}
            {onclick}
        >
            <span class="a11y-option-icon" aria-hidden="true">{ option_icon(action) }</span>
            { i18n::t(&format!("a11y.options.{}", action.as_str())) }
        </button>
    }
}

#[function_component(A11yPanel)]
pub fn a11y_panel(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let emit = |action: A11yAction| {
        let cb = p.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action))
    };
    let dir = if i18n::is_rtl() { "rtl" } else { "ltr" };

    html! {
      <div
        class={classes!("a11y-panel", p.open.then_some("open"))}
        role="dialog"
        aria-modal="true"
        aria-label={i18n::t("a11y.open")}
        aria-hidden={(!p.open).to_string()}
        dir={dir}
        ref={p.panel_ref.clone()}
      >
        <div class="a11y-panel-header">
          <h2>{ accessibility_icon() }{ i18n::t("a11y.title") }</h2>
          <button type="button" class="a11y-close" aria-label={i18n::t("a11y.close")} onclick={close}>{"×"}</button>
        </div>
        <div class="a11y-panel-body">
          <div class="a11y-section">
            <div class="a11y-section-title">{ i18n::t("a11y.sections.font") }</div>
            <div class="a11y-font-row">
              <button type="button" class="a11y-font-btn" data-action={A11yAction::FontDown.as_str()}
                aria-label={i18n::t("a11y.font_down")} onclick={emit(A11yAction::FontDown)}>
                { i18n::t("a11y.font_down_glyph") }
              </button>
              <span class="a11y-font-label" aria-live="polite">{ p.settings.font_label() }</span>
              <button type="button" class="a11y-font-btn" data-action={A11yAction::FontUp.as_str()}
                aria-label={i18n::t("a11y.font_up")} onclick={emit(A11yAction::FontUp)}>
                { i18n::t("a11y.font_up_glyph") }
              </button>
            </div>
          </div>
          { for SECTIONS.iter().zip(A11yAction::OPTIONS.chunks(4)).map(|(section, actions)| html! {
              <div class="a11y-section">
                <div class="a11y-section-title">{ i18n::t(&format!("a11y.sections.{section}")) }</div>
                <div class="a11y-grid">
                  { for actions.iter().map(|action| option_button(&p.settings, *action, &p.on_action)) }
                </div>
              </div>
          }) }
          <button type="button" class="a11y-reset" data-action={A11yAction::Reset.as_str()} onclick={emit(A11yAction::Reset)}>
            { i18n::t("a11y.reset") }
          </button>
          <div id="ponpela-a11y-status" class="a11y-sr-only" aria-live="polite" aria-atomic="true"></div>
        </div>
      </div>
    }
}
