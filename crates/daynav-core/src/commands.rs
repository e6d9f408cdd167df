use std::io::Write;

use anyhow::{Context, anyhow};
use tracing::{debug, info, instrument};

use crate::cli::Invocation;
use crate::config::Config;
use crate::hover::HoverState;
use crate::layout::resolve_layout;
use crate::markup::render_html;
use crate::simulate::{SimEvent, Simulation};

pub fn known_command_names() -> Vec<&'static str> {
    vec!["render", "layout", "simulate", "config", "help", "version"]
}

pub fn expand_command_abbrev<'a>(token: &'a str, known: &[&'a str]) -> Option<&'a str> {
    if known.contains(&token) {
        return Some(token);
    }

    let mut matches = known.iter().copied().filter(|name| name.starts_with(token));
    let first = matches.next()?;
    if matches.next().is_some() {
        None
    } else {
        Some(first)
    }
}

#[instrument(skip(cfg, inv, out))]
pub fn dispatch<W: Write>(cfg: &Config, inv: Invocation, out: &mut W) -> anyhow::Result<()> {
    let command = inv.command.as_str();
    debug!(command, args = ?inv.command_args, "dispatching command");

    match command {
        "render" => cmd_render(cfg, &inv.command_args, out),
        "layout" => cmd_layout(cfg, &inv.command_args, out),
        "simulate" => cmd_simulate(cfg, &inv.command_args, out),
        "config" => cmd_config(cfg, out),
        "help" => cmd_help(out),
        "version" => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => Err(anyhow!("unknown command: {other}")),
    }
}

fn parse_hover_args(args: &[String]) -> anyhow::Result<HoverState> {
    let mut hover = HoverState::default();
    for arg in args {
        match arg.as_str() {
            "hover-prev" => hover.arrow_prev_hovered = true,
            "hover-next" => hover.arrow_next_hovered = true,
            other => return Err(anyhow!("unexpected argument: {other} (expected hover-prev or hover-next)")),
        }
    }
    Ok(hover)
}

#[instrument(skip(cfg, out))]
fn cmd_render<W: Write>(cfg: &Config, args: &[String], out: &mut W) -> anyhow::Result<()> {
    let props = cfg.nav_bar_config()?;
    let hover = parse_hover_args(args)?;
    let layout = resolve_layout(&props, hover);
    writeln!(out, "{}", render_html(&layout))?;
    Ok(())
}

#[instrument(skip(cfg, out))]
fn cmd_layout<W: Write>(cfg: &Config, args: &[String], out: &mut W) -> anyhow::Result<()> {
    let props = cfg.nav_bar_config()?;
    let hover = parse_hover_args(args)?;
    let layout = resolve_layout(&props, hover);
    let json = serde_json::to_string_pretty(&layout).context("failed to serialize layout")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[instrument(skip(cfg, out))]
fn cmd_simulate<W: Write>(cfg: &Config, args: &[String], out: &mut W) -> anyhow::Result<()> {
    let events = args
        .iter()
        .map(|raw| SimEvent::parse(raw).with_context(|| format!("invalid event: {raw}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let props = cfg.nav_bar_config()?;
    let start = cfg.calendar_start()?;
    info!(dir = %props.dir, start = %start, events = events.len(), "starting simulation");

    let mut sim = Simulation::new(props, start);
    writeln!(out, "start {} ({})", start, start.title())?;
    for event in events {
        let report = sim.step(event);
        writeln!(out, "{report}")?;
    }
    writeln!(out, "end {} ({})", sim.month(), sim.month().title())?;
    Ok(())
}

fn cmd_config<W: Write>(cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    for file in &cfg.loaded_files {
        writeln!(out, "# {}", file.display())?;
    }
    for (key, value) in cfg.iter() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

fn cmd_help<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "usage: daynav [-v|-q] [--navbarrc PATH] [--rc KEY=VALUE]... [COMMAND] [ARGS]\n\
         \n\
         commands:\n\
         \x20 render [hover-prev] [hover-next]   print the bar markup\n\
         \x20 layout [hover-prev] [hover-next]   print the resolved layout as JSON\n\
         \x20 simulate EVENT...                  drive the bar with scripted input\n\
         \x20 config                             show effective configuration\n\
         \x20 help | version\n\
         \n\
         events: enter:T leave:T touchstart:T touchend:T click:T key:T:KEY\n\
         \x20 T is prev or next (hover events accept any other target)"
    )?;
    Ok(())
}
