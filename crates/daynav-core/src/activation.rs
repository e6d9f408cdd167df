use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

use crate::layout::ButtonDescriptor;

/// The semantic operation behind a
/// button, as opposed to its visual
/// position.
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
pub enum NavAction {
  Previous,
  Next
}

impl NavAction {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Previous => "previous",
      | Self::Next => "next"
    }
  }
}

impl fmt::Display for NavAction {
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
pub enum ActivationKey {
  Enter,
  Space
}

impl ActivationKey {
  pub const ENTER_KEY_CODE: u32 = 13;
  pub const SPACE_KEY_CODE: u32 = 32;

  /// Maps a DOM `KeyboardEvent.key`
  /// value. Only Enter and Space
  /// activate.
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "Enter" => Some(Self::Enter),
      | " " | "Spacebar" => {
        Some(Self::Space)
      }
      | _ => None
    }
  }

  pub fn from_key_code(
    code: u32
  ) -> Option<Self> {
    match code {
      | Self::ENTER_KEY_CODE => {
        Some(Self::Enter)
      }
      | Self::SPACE_KEY_CODE => {
        Some(Self::Space)
      }
      | _ => None
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Activation {
  Click,
  /// `None` for any key other than
  /// Enter or Space.
  Key(Option<ActivationKey>)
}

impl Activation {
  pub fn key(key: &str) -> Self {
    Self::Key(ActivationKey::from_key(
      key
    ))
  }

  /// Like `key`, but falls back to the
  /// legacy `keyCode` when the browser
  /// reports no usable `key` value.
  pub fn key_event(
    key: &str,
    key_code: u32
  ) -> Self {
    match key {
      | "" | "Unidentified" => {
        Self::Key(
          ActivationKey::from_key_code(
            key_code
          )
        )
      }
      | _ => Self::key(key)
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct ActivationOutcome {
  /// The callback that actually ran.
  pub invoked:         Option<NavAction>,
  /// Whether the host should suppress
  /// the key's default action.
  pub prevent_default: bool
}

/// Caller-supplied zero-argument
/// callbacks. Either may be absent.
pub struct NavCallbacks<F> {
  pub on_previous_click: Option<F>,
  pub on_next_click:     Option<F>
}

impl<F> Default for NavCallbacks<F> {
  fn default() -> Self {
    Self {
      on_previous_click: None,
      on_next_click:     None
    }
  }
}

impl<F> NavCallbacks<F> {
  pub fn get(
    &self,
    action: NavAction
  ) -> Option<&F> {
    match action {
      | NavAction::Previous => {
        self.on_previous_click.as_ref()
      }
      | NavAction::Next => {
        self.on_next_click.as_ref()
      }
    }
  }
}

impl<F: Fn()> NavCallbacks<F> {
  /// Runs the callback for `action`.
  /// A missing callback is a silent
  /// no-op.
  pub fn invoke(
    &self,
    action: NavAction
  ) -> bool {
    match self.get(action) {
      | Some(callback) => {
        callback();
        true
      }
      | None => false
    }
  }
}

impl<F> fmt::Debug for NavCallbacks<F> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("NavCallbacks")
      .field(
        "on_previous_click",
        &self.on_previous_click.is_some()
      )
      .field(
        "on_next_click",
        &self.on_next_click.is_some()
      )
      .finish()
  }
}

/// Shared path for click and keyboard
/// activation of one resolved button.
///
/// A non-interactive button has no
/// handlers at all: nothing runs and no
/// default action is suppressed.
pub fn activate<F: Fn()>(
  button: &ButtonDescriptor,
  activation: Activation,
  callbacks: &NavCallbacks<F>
) -> ActivationOutcome {
  if !button.interactive {
    return ActivationOutcome::default();
  }

  let prevent_default = match activation
  {
    | Activation::Click => false,
    | Activation::Key(Some(_)) => true,
    | Activation::Key(None) => {
      return ActivationOutcome::default();
    }
  };

  let invoked = callbacks
    .invoke(button.action)
    .then_some(button.action);
  tracing::debug!(
    arrow = %button.tag,
    action = %button.action,
    ?activation,
    invoked = invoked.is_some(),
    "navigation button activated"
  );

  ActivationOutcome {
    invoked,
    prevent_default
  }
}
