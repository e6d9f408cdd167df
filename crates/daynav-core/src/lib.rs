pub mod activation;
pub mod calendar;
pub mod direction;
pub mod hover;
pub mod layout;
pub mod markup;
pub mod navbar;
pub mod props;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod simulate;

pub use activation::{
  Activation,
  ActivationKey,
  ActivationOutcome,
  NavAction,
  NavCallbacks,
  activate
};
pub use direction::Direction;
pub use hover::{
  ArrowTag,
  HoverEvent,
  HoverPhase,
  HoverState
};
pub use layout::{
  ButtonDescriptor,
  Layout,
  resolve_layout
};
pub use navbar::{
  NavBar,
  RenderKey
};
pub use props::{
  ClassNames,
  Labels,
  NavBarConfig
};

#[cfg(feature = "cli")]
#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<std::ffi::OsString>
) -> anyhow::Result<()> {
  use clap::Parser;

  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  tracing::info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting daynav CLI"
  );
  tracing::debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.navbarrc.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );

  let inv = cli::Invocation::parse(
    &cfg, cli.rest
  )?;

  let stdout = std::io::stdout();
  commands::dispatch(
    &cfg,
    inv,
    &mut stdout.lock()
  )?;

  tracing::info!("done");
  Ok(())
}
