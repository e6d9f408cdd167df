use std::cell::RefCell;
use std::rc::Rc;

use daynav_core::{
  Activation,
  ArrowTag,
  ButtonDescriptor,
  ClassNames,
  Direction,
  HoverEvent,
  HoverState,
  Labels,
  Layout,
  NavBarConfig,
  NavCallbacks,
  RenderKey,
  activate,
  resolve_layout
};
use web_sys::{
  Element,
  KeyboardEvent,
  MouseEvent,
  TouchEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  TargetCast,
  UseReducerDispatcher,
  function_component,
  html,
  use_memo,
  use_mut_ref,
  use_reducer_eq
};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
  #[prop_or_default]
  pub class_names:              ClassNames,
  #[prop_or_default]
  pub class_name:               Option<String>,
  #[prop_or(true)]
  pub show_previous_button:     bool,
  #[prop_or(true)]
  pub show_next_button:         bool,
  #[prop_or_default]
  pub on_previous_click:
    Option<Callback<()>>,
  #[prop_or_default]
  pub on_next_click:            Option<Callback<()>>,
  #[prop_or_default]
  pub dir:                      Direction,
  #[prop_or_default]
  pub labels:                   Rc<Labels>,
  #[prop_or_default]
  pub hovered_arrow_class_name:
    Option<String>
}

impl NavBarProps {
  fn to_config(&self) -> NavBarConfig {
    NavBarConfig {
      class_names:              self
        .class_names
        .clone(),
      class_name:               self
        .class_name
        .clone(),
      show_previous_button:     self
        .show_previous_button,
      show_next_button:         self
        .show_next_button,
      dir:                      self.dir,
      labels:                   Rc::clone(
        &self.labels
      ),
      hovered_arrow_class_name: self
        .hovered_arrow_class_name
        .clone()
    }
  }

  fn callbacks(
    &self
  ) -> NavCallbacks<Callback<()>> {
    NavCallbacks {
      on_previous_click: self
        .on_previous_click
        .clone(),
      on_next_click:     self
        .on_next_click
        .clone()
    }
  }
}

#[derive(
  Debug, Clone, Copy, Default, PartialEq,
)]
struct HoverCell(HoverState);

impl Reducible for HoverCell {
  type Action = HoverEvent;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let next = self.0.apply(action);
    if next == self.0 {
      self
    } else {
      Rc::new(Self(next))
    }
  }
}

type LatestCallbacks =
  Rc<RefCell<NavCallbacks<Callback<()>>>>;

/// Previous/next arrows for a calendar
/// header.
///
/// The markup is memoized on
/// [`RenderKey`], so changing only the
/// class names, the container class or
/// the hover class does not show until
/// a tracked prop or the hover state
/// changes. Activation always reaches
/// the callbacks of the latest props.
#[function_component(NavBar)]
pub fn nav_bar(
  props: &NavBarProps
) -> Html {
  let hover =
    use_reducer_eq(HoverCell::default);
  let latest = use_mut_ref(
    NavCallbacks::<Callback<()>>::default
  );
  *latest.borrow_mut() = props.callbacks();

  let config = props.to_config();
  let hover_state = hover.0;
  let key =
    RenderKey::new(&config, hover_state);
  let dispatcher = hover.dispatcher();

  let markup = use_memo(key, move |_| {
    let layout =
      resolve_layout(&config, hover_state);
    tracing::trace!(
      dir = %layout.dir,
      "rendering navigation bar"
    );
    view_layout(
      &layout,
      &dispatcher,
      &latest
    )
  });

  (*markup).clone()
}

fn view_layout(
  layout: &Layout,
  dispatcher: &UseReducerDispatcher<
    HoverCell
  >,
  latest: &LatestCallbacks
) -> Html {
  html! {
      <div class={layout.container_class.clone()}>
          {
              for layout.render_order().into_iter().map(|button| {
                  view_button(button, dispatcher, latest)
              })
          }
      </div>
  }
}

fn view_button(
  button: &ButtonDescriptor,
  dispatcher: &UseReducerDispatcher<
    HoverCell
  >,
  latest: &LatestCallbacks
) -> Html {
  let onclick = button.interactive.then(
    || {
      let button = button.clone();
      let latest = Rc::clone(latest);
      Callback::from(
        move |_: MouseEvent| {
          let latest = latest.borrow();
          let callbacks =
            emitters(&latest);
          activate(
            &button,
            Activation::Click,
            &callbacks
          );
        }
      )
    }
  );

  let onkeydown = button.interactive.then(
    || {
      let button = button.clone();
      let latest = Rc::clone(latest);
      Callback::from(
        move |event: KeyboardEvent| {
          let latest = latest.borrow();
          let callbacks =
            emitters(&latest);
          let outcome = activate(
            &button,
            Activation::key_event(
              &event.key(),
              event.key_code()
            ),
            &callbacks
          );
          if outcome.prevent_default {
            event.prevent_default();
          }
        }
      )
    }
  );

  let onmouseenter = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: MouseEvent| {
        dispatcher.dispatch(
          HoverEvent::start(event_arrow(
            &event
          ))
        );
      }
    )
  };
  let onmouseleave = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: MouseEvent| {
        dispatcher.dispatch(
          HoverEvent::end(event_arrow(
            &event
          ))
        );
      }
    )
  };
  let ontouchstart = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: TouchEvent| {
        dispatcher.dispatch(
          HoverEvent::start(event_arrow(
            &event
          ))
        );
      }
    )
  };
  let ontouchend = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: TouchEvent| {
        dispatcher.dispatch(
          HoverEvent::end(event_arrow(
            &event
          ))
        );
      }
    )
  };

  html! {
      <span
          key={button.tag.as_str()}
          tabindex={button.tab_index.to_string()}
          role={button.role}
          aria-label={button.label.clone()}
          class={button.class.clone()}
          data-arrow={button.tag.as_str()}
          {onclick}
          {onkeydown}
          {onmouseenter}
          {onmouseleave}
          {ontouchstart}
          {ontouchend}
      />
  }
}

/// Reads the `data-arrow` tag of the
/// element an event fired on.
fn event_arrow<E: TargetCast>(
  event: &E
) -> Option<ArrowTag> {
  event
    .target_dyn_into::<Element>()
    .and_then(|element| {
      element.get_attribute(
        ArrowTag::ATTRIBUTE
      )
    })
    .and_then(|raw| {
      ArrowTag::from_key(&raw)
    })
}

fn emitter(
  callback: Callback<()>
) -> impl Fn() {
  move || callback.emit(())
}

/// Snapshot of the latest callbacks as
/// plain closures, so the `RefCell` is
/// released before any host code runs.
fn emitters(
  callbacks: &NavCallbacks<Callback<()>>
) -> NavCallbacks<impl Fn()> {
  NavCallbacks {
    on_previous_click: callbacks
      .on_previous_click
      .clone()
      .map(emitter),
    on_next_click:     callbacks
      .on_next_click
      .clone()
      .map(emitter)
  }
}
