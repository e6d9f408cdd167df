use daynav_core::calendar::MonthCursor;
use daynav_core::{
  ClassNames,
  Direction,
  Labels,
  NavAction
};
use serde::Deserialize;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_memo,
  use_state
};

use crate::components::{
  MonthCaption,
  NavBar
};

const NAVBAR_CONFIG_TOML: &str =
  include_str!("../assets/navbar.toml");

#[derive(
  Clone, Default, PartialEq, Deserialize,
)]
struct DemoConfig {
  #[serde(default)]
  version:                  u32,
  #[serde(default)]
  dir:                      Direction,
  #[serde(default)]
  class_name:               Option<String>,
  #[serde(default)]
  hovered_arrow_class_name: Option<String>,
  #[serde(default)]
  labels:                   Labels,
  #[serde(default)]
  class_names:              ClassNames,
  #[serde(default)]
  range:                    RangeConfig
}

#[derive(
  Clone, Default, PartialEq, Deserialize,
)]
struct RangeConfig {
  from_month: Option<String>,
  to_month:   Option<String>
}

/// Inclusive month bounds of the demo
/// calendar.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
struct MonthRange {
  from: Option<MonthCursor>,
  to:   Option<MonthCursor>
}

impl MonthRange {
  fn allows(
    self,
    month: MonthCursor
  ) -> bool {
    self.from.is_none_or(|from| month >= from)
      && self.to.is_none_or(|to| month <= to)
  }

  fn clamp(
    self,
    month: MonthCursor
  ) -> MonthCursor {
    match (self.from, self.to) {
      | (Some(from), _) if month < from => {
        from
      }
      | (_, Some(to)) if month > to => to,
      | _ => month
    }
  }
}

impl DemoConfig {
  fn month_range(&self) -> MonthRange {
    MonthRange {
      from: parse_bound(
        "from_month",
        self.range.from_month.as_deref()
      ),
      to:   parse_bound(
        "to_month",
        self.range.to_month.as_deref()
      )
    }
  }
}

fn parse_bound(
  name: &str,
  raw: Option<&str>
) -> Option<MonthCursor> {
  let raw = raw?.trim();
  if raw.is_empty() {
    return None;
  }
  match MonthCursor::parse(raw) {
    | Ok(month) => Some(month),
    | Err(error) => {
      tracing::warn!(
        bound = name,
        %error,
        "ignoring invalid range bound"
      );
      None
    }
  }
}

fn load_demo_config() -> DemoConfig {
  match toml::from_str::<DemoConfig>(
    NAVBAR_CONFIG_TOML
  ) {
    | Ok(mut config) => {
      sanitize_demo_config(&mut config);
      tracing::info!(
        version = config.version,
        dir = %config.dir,
        "loaded navigation bar config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing navigation bar config; using defaults");
      DemoConfig::default()
    }
  }
}

fn sanitize_demo_config(
  config: &mut DemoConfig
) {
  let labels = Labels::default();
  if config
    .labels
    .previous_month
    .trim()
    .is_empty()
  {
    config.labels.previous_month =
      labels.previous_month;
  }
  if config
    .labels
    .next_month
    .trim()
    .is_empty()
  {
    config.labels.next_month =
      labels.next_month;
  }

  let classes = ClassNames::default();
  if config
    .class_names
    .nav_bar
    .trim()
    .is_empty()
  {
    config.class_names.nav_bar =
      classes.nav_bar;
  }
  if config
    .class_names
    .nav_button_prev
    .trim()
    .is_empty()
  {
    config.class_names.nav_button_prev =
      classes.nav_button_prev;
  }
  if config
    .class_names
    .nav_button_next
    .trim()
    .is_empty()
  {
    config.class_names.nav_button_next =
      classes.nav_button_next;
  }

  config.class_name = config
    .class_name
    .take()
    .filter(|v| !v.trim().is_empty());
  config.hovered_arrow_class_name = config
    .hovered_arrow_class_name
    .take()
    .filter(|v| !v.trim().is_empty());
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    load_demo_config()
  });
  // One `Labels` allocation for the
  // whole session; the bar compares it
  // by identity.
  let labels = {
    let config = config.clone();
    use_memo((), move |_| {
      config.labels.clone()
    })
  };
  let range = config.month_range();
  let month = use_state(move || {
    range.clamp(MonthCursor::current())
  });
  let dir = {
    let initial = config.dir;
    use_state(move || initial)
  };

  let show_previous_button = range
    .allows(month.step(NavAction::Previous));
  let show_next_button =
    range.allows(month.step(NavAction::Next));

  let on_previous_click = {
    let month = month.clone();
    Callback::from(move |()| {
      month.set(
        month.step(NavAction::Previous)
      );
    })
  };
  let on_next_click = {
    let month = month.clone();
    Callback::from(move |()| {
      month.set(
        month.step(NavAction::Next)
      );
    })
  };
  let on_toggle_dir = {
    let dir = dir.clone();
    Callback::from(
      move |_: MouseEvent| {
        let next = match *dir {
          | Direction::Ltr => {
            Direction::Rtl
          }
          | Direction::Rtl => {
            Direction::Ltr
          }
        };
        tracing::debug!(dir = %next, "toggled reading direction");
        dir.set(next);
      }
    )
  };

  html! {
      <div class="DayPicker" dir={dir.as_str()}>
          <div class="DayPicker-Month">
              <NavBar
                  class_names={config.class_names.clone()}
                  class_name={config.class_name.clone()}
                  show_previous_button={show_previous_button}
                  show_next_button={show_next_button}
                  on_previous_click={Some(on_previous_click)}
                  on_next_click={Some(on_next_click)}
                  dir={*dir}
                  labels={labels}
                  hovered_arrow_class_name={config.hovered_arrow_class_name.clone()}
              />
              <MonthCaption month={*month} />
          </div>
          <div class="actions">
              <button class="btn" type="button" onclick={on_toggle_dir}>
                  { "Toggle direction" }
              </button>
          </div>
      </div>
  }
}
