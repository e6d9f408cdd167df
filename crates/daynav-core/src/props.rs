use std::rc::Rc;

use serde::{
  Deserialize,
  Serialize
};

use crate::direction::Direction;

pub const DEFAULT_NAV_BAR_CLASS: &str =
  "DayPicker-NavBar";
pub const DEFAULT_NAV_BUTTON_PREV_CLASS:
  &str = "DayPicker-NavButton \
          DayPicker-NavButton--prev";
pub const DEFAULT_NAV_BUTTON_NEXT_CLASS:
  &str = "DayPicker-NavButton \
          DayPicker-NavButton--next";
pub const DEFAULT_INTERACTION_DISABLED_CLASS: &str =
  "DayPicker-NavButton--interactionDisabled";

pub const DEFAULT_PREVIOUS_MONTH_LABEL:
  &str = "Previous Month";
pub const DEFAULT_NEXT_MONTH_LABEL:
  &str = "Next Month";

/// Opaque CSS class names consumed by
/// the bar.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ClassNames {
  pub nav_bar:                         String,
  pub nav_button_prev:                 String,
  pub nav_button_next:                 String,
  #[serde(default)]
  pub nav_button_interaction_disabled:
    Option<String>
}

impl Default for ClassNames {
  fn default() -> Self {
    Self {
      nav_bar:
        DEFAULT_NAV_BAR_CLASS.to_string(),
      nav_button_prev:
        DEFAULT_NAV_BUTTON_PREV_CLASS
          .to_string(),
      nav_button_next:
        DEFAULT_NAV_BUTTON_NEXT_CLASS
          .to_string(),
      nav_button_interaction_disabled:
        Some(
          DEFAULT_INTERACTION_DISABLED_CLASS
            .to_string()
        )
    }
  }
}

/// Accessible names for the two
/// buttons.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Labels {
  pub previous_month: String,
  pub next_month:     String
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      previous_month:
        DEFAULT_PREVIOUS_MONTH_LABEL
          .to_string(),
      next_month:
        DEFAULT_NEXT_MONTH_LABEL
          .to_string()
    }
  }
}

fn default_true() -> bool {
  true
}

/// Per-render configuration snapshot.
///
/// `labels` is shared behind an `Rc`
/// because change detection compares
/// it by identity, not by value.
/// Callbacks live in
/// [`crate::activation::NavCallbacks`]
/// so this record stays plain data.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct NavBarConfig {
  #[serde(default)]
  pub class_names:              ClassNames,
  #[serde(default)]
  pub class_name:               Option<String>,
  #[serde(default = "default_true")]
  pub show_previous_button:     bool,
  #[serde(default = "default_true")]
  pub show_next_button:         bool,
  #[serde(default)]
  pub dir:                      Direction,
  #[serde(default)]
  pub labels:                   Rc<Labels>,
  #[serde(default)]
  pub hovered_arrow_class_name:
    Option<String>
}

impl Default for NavBarConfig {
  fn default() -> Self {
    Self {
      class_names:              ClassNames::default(),
      class_name:               None,
      show_previous_button:     true,
      show_next_button:         true,
      dir:                      Direction::Ltr,
      labels:                   Rc::new(Labels::default()),
      hovered_arrow_class_name: None
    }
  }
}

impl NavBarConfig {
  pub fn with_dir(
    mut self,
    dir: Direction
  ) -> Self {
    self.dir = dir;
    self
  }

  pub fn with_buttons(
    mut self,
    show_previous: bool,
    show_next: bool
  ) -> Self {
    self.show_previous_button =
      show_previous;
    self.show_next_button = show_next;
    self
  }

  pub fn with_hovered_arrow_class_name(
    mut self,
    class: impl Into<String>
  ) -> Self {
    self.hovered_arrow_class_name =
      Some(class.into());
    self
  }

  /// Container class: the override if
  /// present, else `classNames.navBar`.
  pub fn container_class(&self) -> &str {
    self
      .class_name
      .as_deref()
      .unwrap_or(&self.class_names.nav_bar)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_day_picker_classes()
  {
    let config = NavBarConfig::default();
    assert!(config.show_previous_button);
    assert!(config.show_next_button);
    assert_eq!(config.dir, Direction::Ltr);
    assert_eq!(
      config.labels.previous_month,
      "Previous Month"
    );
    assert_eq!(
      config.labels.next_month,
      "Next Month"
    );
    assert_eq!(
      config.container_class(),
      "DayPicker-NavBar"
    );
  }

  #[test]
  fn class_name_overrides_container() {
    let config = NavBarConfig {
      class_name: Some(
        "calendar-nav".to_string()
      ),
      ..NavBarConfig::default()
    };
    assert_eq!(
      config.container_class(),
      "calendar-nav"
    );
  }

  #[test]
  fn partial_json_fills_defaults() {
    let config: NavBarConfig =
      serde_json::from_str(
        r#"{"dir":"rtl","show_next_button":false}"#
      )
      .expect("parse config");
    assert_eq!(config.dir, Direction::Rtl);
    assert!(config.show_previous_button);
    assert!(!config.show_next_button);
    assert_eq!(
      config.class_names,
      ClassNames::default()
    );
  }
}
