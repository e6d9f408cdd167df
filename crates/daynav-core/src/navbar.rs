use std::rc::Rc;

use crate::activation::{
  Activation,
  ActivationOutcome,
  NavCallbacks,
  activate
};
use crate::direction::Direction;
use crate::hover::{
  ArrowTag,
  HoverEvent,
  HoverState
};
use crate::layout::{
  Layout,
  resolve_layout
};
use crate::props::{
  Labels,
  NavBarConfig
};

/// The inputs that decide whether the
/// bar re-renders.
///
/// `labels` is compared by identity.
/// Class names, the container override,
/// the hover class and the callbacks
/// are deliberately absent: changing
/// only those leaves the previous
/// render in place until something in
/// this key changes.
#[derive(Debug, Clone)]
pub struct RenderKey {
  labels:               Rc<Labels>,
  dir:                  Direction,
  show_previous_button: bool,
  show_next_button:     bool,
  hover:                HoverState
}

impl RenderKey {
  pub fn new(
    config: &NavBarConfig,
    hover: HoverState
  ) -> Self {
    Self {
      labels: Rc::clone(&config.labels),
      dir: config.dir,
      show_previous_button: config
        .show_previous_button,
      show_next_button: config
        .show_next_button,
      hover
    }
  }
}

impl PartialEq for RenderKey {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(
      &self.labels,
      &other.labels
    ) && self.dir == other.dir
      && self.show_previous_button
        == other.show_previous_button
      && self.show_next_button
        == other.show_next_button
      && self.hover == other.hover
  }
}

/// Headless instance of the navigation
/// bar: current props, the hover record
/// and the last rendered layout.
///
/// Activation goes through the handlers
/// attached at the last render but
/// calls whatever callbacks the latest
/// props carry.
pub struct NavBar<F> {
  config:       NavBarConfig,
  callbacks:    NavCallbacks<F>,
  hover:        HoverState,
  rendered:     Layout,
  rendered_key: RenderKey,
  renders:      u64
}

impl<F: Fn()> NavBar<F> {
  pub fn new(
    config: NavBarConfig,
    callbacks: NavCallbacks<F>
  ) -> Self {
    let hover = HoverState::default();
    let rendered =
      resolve_layout(&config, hover);
    let rendered_key =
      RenderKey::new(&config, hover);
    Self {
      config,
      callbacks,
      hover,
      rendered,
      rendered_key,
      renders: 1
    }
  }

  pub fn hover_state(&self) -> HoverState {
    self.hover
  }

  /// The layout as last rendered, which
  /// may lag behind the current props.
  pub fn layout(&self) -> &Layout {
    &self.rendered
  }

  pub fn render_count(&self) -> u64 {
    self.renders
  }

  /// Replaces the props. Returns
  /// whether a re-render happened.
  pub fn set_props(
    &mut self,
    config: NavBarConfig,
    callbacks: NavCallbacks<F>
  ) -> bool {
    self.config = config;
    self.callbacks = callbacks;
    self.rerender_if_changed()
  }

  /// Applies a pointer/touch event.
  /// Returns whether a re-render
  /// happened.
  pub fn handle_hover(
    &mut self,
    event: HoverEvent
  ) -> bool {
    self.hover = self.hover.apply(event);
    self.rerender_if_changed()
  }

  pub fn click(
    &self,
    tag: ArrowTag
  ) -> ActivationOutcome {
    activate(
      self.rendered.button(tag),
      Activation::Click,
      &self.callbacks
    )
  }

  /// `key` is a DOM
  /// `KeyboardEvent.key` value.
  pub fn key_down(
    &self,
    tag: ArrowTag,
    key: &str
  ) -> ActivationOutcome {
    activate(
      self.rendered.button(tag),
      Activation::key(key),
      &self.callbacks
    )
  }

  fn rerender_if_changed(
    &mut self
  ) -> bool {
    let key =
      RenderKey::new(&self.config, self.hover);
    if key == self.rendered_key {
      tracing::trace!(
        "navigation bar render skipped"
      );
      return false;
    }

    self.rendered =
      resolve_layout(&self.config, self.hover);
    self.rendered_key = key;
    self.renders += 1;
    tracing::debug!(
      dir = %self.config.dir,
      renders = self.renders,
      "navigation bar re-rendered"
    );
    true
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::*;
  use crate::activation::NavAction;

  type Log = Rc<RefCell<Vec<NavAction>>>;

  fn recording(
    log: &Log
  ) -> NavCallbacks<Box<dyn Fn()>> {
    let prev_log = Rc::clone(log);
    let next_log = Rc::clone(log);
    NavCallbacks {
      on_previous_click: Some(Box::new(
        move || {
          prev_log
            .borrow_mut()
            .push(NavAction::Previous)
        }
      )),
      on_next_click:     Some(Box::new(
        move || {
          next_log
            .borrow_mut()
            .push(NavAction::Next)
        }
      ))
    }
  }

  #[test]
  fn hover_change_rerenders_once() {
    let log = Log::default();
    let mut bar = NavBar::new(
      NavBarConfig::default()
        .with_hovered_arrow_class_name(
          "hot"
        ),
      recording(&log)
    );
    assert!(bar.handle_hover(
      HoverEvent::start(Some(
        ArrowTag::Prev
      ))
    ));
    assert!(!bar.handle_hover(
      HoverEvent::start(Some(
        ArrowTag::Prev
      ))
    ));
    assert_eq!(bar.render_count(), 2);
    assert!(
      bar.layout().left.class.ends_with(" hot")
    );
    assert!(log.borrow().is_empty());
  }

  #[test]
  fn class_only_changes_stay_stale() {
    let log = Log::default();
    let config = NavBarConfig::default();
    let labels = Rc::clone(&config.labels);
    let mut bar = NavBar::new(
      config.clone(),
      recording(&log)
    );

    let restyled = NavBarConfig {
      class_name: Some(
        "restyled".to_string()
      ),
      hovered_arrow_class_name: Some(
        "hot".to_string()
      ),
      labels: Rc::clone(&labels),
      ..config.clone()
    };
    assert!(
      !bar.set_props(restyled, recording(&log))
    );
    assert_eq!(
      bar.layout().container_class,
      "DayPicker-NavBar"
    );

    // The next tracked change picks the
    // pending class override up.
    assert!(bar.handle_hover(
      HoverEvent::start(Some(
        ArrowTag::Next
      ))
    ));
    assert_eq!(
      bar.layout().container_class,
      "restyled"
    );
    assert!(
      bar.layout().right.class.ends_with(" hot")
    );
  }

  #[test]
  fn equal_labels_with_new_identity_rerender()
  {
    let log = Log::default();
    let config = NavBarConfig::default();
    let mut bar = NavBar::new(
      config.clone(),
      recording(&log)
    );
    let relabelled = NavBarConfig {
      labels: Rc::new(Labels::default()),
      ..config
    };
    assert!(
      bar.set_props(relabelled, recording(&log))
    );
  }

  #[test]
  fn replaced_callbacks_apply_without_rerender()
  {
    let first = Log::default();
    let second = Log::default();
    let config = NavBarConfig::default();
    let mut bar = NavBar::new(
      config.clone(),
      recording(&first)
    );
    assert!(
      !bar.set_props(config, recording(&second))
    );
    bar.click(ArrowTag::Prev);
    assert!(first.borrow().is_empty());
    assert_eq!(
      *second.borrow(),
      vec![NavAction::Previous]
    );
  }
}
