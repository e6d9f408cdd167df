use serde::Serialize;

use crate::activation::NavAction;
use crate::direction::Direction;
use crate::hover::{
  ArrowTag,
  HoverState
};
use crate::props::NavBarConfig;

pub const BUTTON_ROLE: &str = "button";
pub const BUTTON_TAB_INDEX: i32 = 0;

/// Everything the click, keydown and
/// render paths need to know about one
/// visual button.
#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct ButtonDescriptor {
  pub tag:         ArrowTag,
  pub action:      NavAction,
  pub interactive: bool,
  pub hovered:     bool,
  pub class:       String,
  pub label:       String,
  pub role:        &'static str,
  pub tab_index:   i32
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct Layout {
  pub dir:             Direction,
  pub container_class: String,
  pub left:            ButtonDescriptor,
  pub right:           ButtonDescriptor
}

impl Layout {
  pub fn button(
    &self,
    tag: ArrowTag
  ) -> &ButtonDescriptor {
    match tag {
      | ArrowTag::Prev => &self.left,
      | ArrowTag::Next => &self.right
    }
  }

  /// Document order of the two buttons;
  /// mirrored for `rtl`.
  pub fn render_order(
    &self
  ) -> [&ButtonDescriptor; 2] {
    match self.dir {
      | Direction::Ltr => {
        [&self.left, &self.right]
      }
      | Direction::Rtl => {
        [&self.right, &self.left]
      }
    }
  }
}

/// Resolves both visual buttons from
/// the configuration and hover flags.
///
/// In `rtl` the visual-left button runs
/// the next action under
/// `show_next_button` and takes its
/// hover class from the next-arrow
/// flag; the visual-right button
/// mirrors that. Base classes and
/// labels stay attached to the visual
/// position.
pub fn resolve_layout(
  config: &NavBarConfig,
  hover: HoverState
) -> Layout {
  let (
    left_action,
    left_enabled,
    left_hovered,
    right_action,
    right_enabled,
    right_hovered
  ) = match config.dir {
    | Direction::Ltr => (
      NavAction::Previous,
      config.show_previous_button,
      hover.arrow_prev_hovered,
      NavAction::Next,
      config.show_next_button,
      hover.arrow_next_hovered
    ),
    | Direction::Rtl => (
      NavAction::Next,
      config.show_next_button,
      hover.arrow_next_hovered,
      NavAction::Previous,
      config.show_previous_button,
      hover.arrow_prev_hovered
    )
  };

  let left = ButtonDescriptor {
    tag:         ArrowTag::Prev,
    action:      left_action,
    interactive: left_enabled,
    hovered:     left_hovered,
    class:       button_class(
      config,
      &config.class_names.nav_button_prev,
      left_enabled,
      left_hovered
    ),
    label:       config
      .labels
      .previous_month
      .clone(),
    role:        BUTTON_ROLE,
    tab_index:   BUTTON_TAB_INDEX
  };

  let right = ButtonDescriptor {
    tag:         ArrowTag::Next,
    action:      right_action,
    interactive: right_enabled,
    hovered:     right_hovered,
    class:       button_class(
      config,
      &config.class_names.nav_button_next,
      right_enabled,
      right_hovered
    ),
    label:       config
      .labels
      .next_month
      .clone(),
    role:        BUTTON_ROLE,
    tab_index:   BUTTON_TAB_INDEX
  };

  Layout {
    dir: config.dir,
    container_class: config
      .container_class()
      .to_string(),
    left,
    right
  }
}

fn button_class(
  config: &NavBarConfig,
  base: &str,
  interactive: bool,
  hovered: bool
) -> String {
  let mut class = base.to_string();

  if !interactive
    && let Some(disabled) = non_blank(
      config
        .class_names
        .nav_button_interaction_disabled
        .as_deref()
    )
  {
    class.push(' ');
    class.push_str(disabled);
  }

  if hovered
    && let Some(hover_class) = non_blank(
      config
        .hovered_arrow_class_name
        .as_deref()
    )
  {
    class.push(' ');
    class.push_str(hover_class);
  }

  class
}

fn non_blank(
  value: Option<&str>
) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::props::{
    ClassNames,
    DEFAULT_NAV_BUTTON_NEXT_CLASS,
    DEFAULT_NAV_BUTTON_PREV_CLASS
  };

  fn plain_classes() -> NavBarConfig {
    NavBarConfig {
      class_names: ClassNames {
        nav_bar: "bar".to_string(),
        nav_button_prev: "prev".to_string(),
        nav_button_next: "next".to_string(),
        nav_button_interaction_disabled:
          Some("off".to_string())
      },
      ..NavBarConfig::default()
    }
  }

  #[test]
  fn ltr_maps_left_to_previous() {
    let layout = resolve_layout(
      &NavBarConfig::default(),
      HoverState::default()
    );
    assert_eq!(
      layout.left.action,
      NavAction::Previous
    );
    assert_eq!(
      layout.right.action,
      NavAction::Next
    );
    assert_eq!(
      layout.left.class,
      DEFAULT_NAV_BUTTON_PREV_CLASS
    );
    assert_eq!(
      layout.right.class,
      DEFAULT_NAV_BUTTON_NEXT_CLASS
    );
    let order: Vec<ArrowTag> = layout
      .render_order()
      .iter()
      .map(|b| b.tag)
      .collect();
    assert_eq!(order, vec![
      ArrowTag::Prev,
      ArrowTag::Next
    ]);
  }

  #[test]
  fn rtl_mirrors_actions_and_order() {
    let config = plain_classes()
      .with_dir(Direction::Rtl);
    let layout = resolve_layout(
      &config,
      HoverState::default()
    );
    assert_eq!(
      layout.left.action,
      NavAction::Next
    );
    assert_eq!(
      layout.right.action,
      NavAction::Previous
    );
    assert_eq!(layout.left.class, "prev");
    assert_eq!(layout.right.class, "next");
    let order: Vec<ArrowTag> = layout
      .render_order()
      .iter()
      .map(|b| b.tag)
      .collect();
    assert_eq!(order, vec![
      ArrowTag::Next,
      ArrowTag::Prev
    ]);
  }

  #[test]
  fn rtl_governs_left_by_show_next() {
    let config = plain_classes()
      .with_dir(Direction::Rtl)
      .with_buttons(true, false);
    let layout = resolve_layout(
      &config,
      HoverState::default()
    );
    assert!(!layout.left.interactive);
    assert_eq!(layout.left.class, "prev off");
    assert!(layout.right.interactive);
    assert_eq!(layout.right.class, "next");
  }

  #[test]
  fn disabled_class_for_every_flag_combination()
  {
    for (show_prev, show_next) in [
      (true, true),
      (true, false),
      (false, true),
      (false, false)
    ] {
      let layout = resolve_layout(
        &plain_classes()
          .with_buttons(show_prev, show_next),
        HoverState::default()
      );
      assert_eq!(
        layout.left.interactive,
        show_prev
      );
      assert_eq!(
        layout.right.interactive,
        show_next
      );
      assert_eq!(
        layout.left.class.ends_with(" off"),
        !show_prev
      );
      assert_eq!(
        layout.right.class.ends_with(" off"),
        !show_next
      );
    }
  }

  #[test]
  fn hover_class_follows_disabled_suffix()
  {
    let config = plain_classes()
      .with_buttons(false, true)
      .with_hovered_arrow_class_name("hot");
    let hover = HoverState {
      arrow_prev_hovered: true,
      arrow_next_hovered: false
    };
    let layout =
      resolve_layout(&config, hover);
    assert_eq!(
      layout.left.class,
      "prev off hot"
    );
    assert_eq!(layout.right.class, "next");
  }

  #[test]
  fn rtl_hover_class_reads_mirrored_flag()
  {
    let config = plain_classes()
      .with_dir(Direction::Rtl)
      .with_hovered_arrow_class_name("hot");
    let hover = HoverState {
      arrow_prev_hovered: true,
      arrow_next_hovered: false
    };
    let layout =
      resolve_layout(&config, hover);
    assert_eq!(layout.left.class, "prev");
    assert_eq!(
      layout.right.class,
      "next hot"
    );
  }

  #[test]
  fn missing_optional_classes_append_nothing()
  {
    let mut config = plain_classes()
      .with_buttons(false, false);
    config
      .class_names
      .nav_button_interaction_disabled =
      None;
    let hover = HoverState {
      arrow_prev_hovered: true,
      arrow_next_hovered: true
    };
    let layout =
      resolve_layout(&config, hover);
    assert_eq!(layout.left.class, "prev");
    assert_eq!(layout.right.class, "next");
  }

  #[test]
  fn accessibility_attributes_ignore_interactivity()
  {
    let layout = resolve_layout(
      &plain_classes()
        .with_buttons(false, false),
      HoverState::default()
    );
    for button in layout.render_order() {
      assert_eq!(button.role, "button");
      assert_eq!(button.tab_index, 0);
    }
    assert_eq!(
      layout.left.label,
      "Previous Month"
    );
    assert_eq!(
      layout.right.label,
      "Next Month"
    );
  }
}
