use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Tag carried by each rendered arrow
/// element (`data-arrow`). `Prev` is
/// the visual-left element, `Next` the
/// visual-right one, whatever logical
/// action they currently trigger.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArrowTag {
  Prev,
  Next
}

impl ArrowTag {
  pub const ATTRIBUTE: &'static str =
    "data-arrow";

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Prev => "prev",
      | Self::Next => "next"
    }
  }

  /// Reads a tag back from an element
  /// attribute. Anything else is not
  /// one of ours.
  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "prev" => Some(Self::Prev),
      | "next" => Some(Self::Next),
      | _ => None
    }
  }
}

impl fmt::Display for ArrowTag {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum HoverPhase {
  /// mouseenter / touchstart
  Start,
  /// mouseleave / touchend
  End
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct HoverEvent {
  pub phase:  HoverPhase,
  /// `None` when the event target is
  /// not one of the two arrows.
  pub target: Option<ArrowTag>
}

impl HoverEvent {
  pub fn start(
    target: Option<ArrowTag>
  ) -> Self {
    Self {
      phase: HoverPhase::Start,
      target
    }
  }

  pub fn end(
    target: Option<ArrowTag>
  ) -> Self {
    Self {
      phase: HoverPhase::End,
      target
    }
  }
}

/// The only state the bar owns. The two
/// flags are independent; nothing keeps
/// them mutually exclusive.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct HoverState {
  pub arrow_prev_hovered: bool,
  pub arrow_next_hovered: bool
}

impl HoverState {
  #[must_use]
  pub fn apply(
    self,
    event: HoverEvent
  ) -> Self {
    let Some(tag) = event.target else {
      tracing::trace!(
        ?event.phase,
        "hover event from foreign \
         target ignored"
      );
      return self;
    };

    let hovered =
      event.phase == HoverPhase::Start;
    let mut next = self;
    match tag {
      | ArrowTag::Prev => {
        next.arrow_prev_hovered = hovered
      }
      | ArrowTag::Next => {
        next.arrow_next_hovered = hovered
      }
    }

    if next != self {
      tracing::trace!(
        arrow = %tag,
        hovered,
        "hover state changed"
      );
    }
    next
  }
}
