use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use anyhow::{anyhow, bail};

use crate::activation::{ActivationOutcome, NavAction, NavCallbacks};
use crate::calendar::MonthCursor;
use crate::hover::{ArrowTag, HoverEvent};
use crate::navbar::NavBar;
use crate::props::NavBarConfig;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Hover(HoverEvent),
    Click(ArrowTag),
    Key(ArrowTag, String),
}

impl SimEvent {
    /// Parses `enter:prev`, `leave:next`, `touchstart:other`, `click:prev`,
    /// `key:next:Enter` and friends. Hover targets other than `prev` and
    /// `next` model events from a foreign element.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut parts = raw.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let target = parts
            .next()
            .ok_or_else(|| anyhow!("event {raw} is missing a target"))?;

        match kind {
            "enter" | "touchstart" => Ok(Self::Hover(HoverEvent::start(ArrowTag::from_key(target)))),
            "leave" | "touchend" => Ok(Self::Hover(HoverEvent::end(ArrowTag::from_key(target)))),
            "click" => Ok(Self::Click(arrow(target)?)),
            "key" => {
                let key = parts
                    .next()
                    .ok_or_else(|| anyhow!("event {raw} is missing a key name"))?;
                // `Space` is the readable spelling of the DOM value " ".
                let key = if key == "Space" { " " } else { key };
                Ok(Self::Key(arrow(target)?, key.to_string()))
            }
            other => bail!("unknown event kind: {other}"),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hover(event) => {
                let target = event.target.map(ArrowTag::as_str).unwrap_or("other");
                write!(f, "hover {:?} {target}", event.phase)
            }
            Self::Click(tag) => write!(f, "click {tag}"),
            Self::Key(tag, key) => write!(f, "key {tag} {key:?}"),
        }
    }
}

fn arrow(raw: &str) -> anyhow::Result<ArrowTag> {
    ArrowTag::from_key(raw).ok_or_else(|| anyhow!("expected prev or next, got: {raw}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub event: SimEvent,
    pub outcome: ActivationOutcome,
    pub rerendered: bool,
    pub renders: u64,
    pub month: MonthCursor,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} invoked={:<8} prevent_default={:<5} rerendered={:<5} renders={:<3} month={}",
            self.event.to_string(),
            self.outcome.invoked.map(NavAction::as_str).unwrap_or("-"),
            self.outcome.prevent_default,
            self.rerendered,
            self.renders,
            self.month
        )
    }
}

/// A headless bar hosted by a month calendar that moves on each callback.
pub struct Simulation {
    month: Rc<Cell<MonthCursor>>,
    bar: NavBar<Box<dyn Fn()>>,
}

impl Simulation {
    pub fn new(config: NavBarConfig, start: MonthCursor) -> Self {
        let month = Rc::new(Cell::new(start));
        let bar = NavBar::new(config, host_callbacks(&month));
        Self { month, bar }
    }

    pub fn month(&self) -> MonthCursor {
        self.month.get()
    }

    #[tracing::instrument(skip_all, fields(event = %event))]
    pub fn step(&mut self, event: SimEvent) -> StepReport {
        let (outcome, rerendered) = match &event {
            SimEvent::Hover(hover) => (ActivationOutcome::default(), self.bar.handle_hover(*hover)),
            SimEvent::Click(tag) => (self.bar.click(*tag), false),
            SimEvent::Key(tag, key) => (self.bar.key_down(*tag, key), false),
        };

        StepReport {
            event,
            outcome,
            rerendered,
            renders: self.bar.render_count(),
            month: self.month.get(),
        }
    }
}

fn host_callbacks(month: &Rc<Cell<MonthCursor>>) -> NavCallbacks<Box<dyn Fn()>> {
    let on_previous = Rc::clone(month);
    let on_next = Rc::clone(month);
    NavCallbacks {
        on_previous_click: Some(Box::new(move || {
            on_previous.set(on_previous.get().step(NavAction::Previous));
        })),
        on_next_click: Some(Box::new(move || {
            on_next.set(on_next.get().step(NavAction::Next));
        })),
    }
}
