use std::collections::BTreeMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};
use std::rc::Rc;

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  info,
  trace,
  warn
};

use crate::calendar::MonthCursor;
use crate::direction::Direction;
use crate::props::{
  ClassNames,
  Labels,
  NavBarConfig
};

pub const RC_ENV: &str = "NAVBARRC";
pub const RC_FILE_NAME: &str =
  ".navbarrc";

#[derive(Debug, Clone)]
pub struct Config {
  map:              BTreeMap<String, String>,
  pub loaded_files: Vec<PathBuf>,
  /// Canonical paths of the files
  /// currently being loaded, outermost
  /// first.
  include_chain:    Vec<PathBuf>
}

impl Default for Config {
  fn default() -> Self {
    let mut map = BTreeMap::new();
    map.insert(
      "default.command".to_string(),
      "render".to_string()
    );
    map.insert(
      "dir".to_string(),
      "ltr".to_string()
    );
    Self {
      map,
      loaded_files: vec![],
      include_chain: vec![]
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    rc_override
  ))]
  pub fn load(
    rc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config::default();

    let rc = resolve_rc_path(rc_override)?;
    if let Some(path) = rc {
      info!(navbarrc = %path.display(), "loading navbarrc");
      cfg.load_file(&path)?;
    } else {
      debug!(
        "no navbarrc found; using \
         defaults"
      );
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_bool(
    &self,
    key: &str
  ) -> anyhow::Result<Option<bool>> {
    self
      .map
      .get(key)
      .map(|v| {
        parse_bool(v).ok_or_else(|| {
          anyhow!(
            "invalid boolean for {key}: \
             {v}"
          )
        })
      })
      .transpose()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = (&String, &String)>
  {
    self.map.iter()
  }

  /// Builds the bar's props from the
  /// `dir`, `show.*`, `classname`,
  /// `classnames.*`, `labels.*` and
  /// `hovered.classname` keys.
  pub fn nav_bar_config(
    &self
  ) -> anyhow::Result<NavBarConfig> {
    let defaults = ClassNames::default();
    let class_names = ClassNames {
      nav_bar:                         self
        .get("classnames.navbar")
        .unwrap_or(defaults.nav_bar),
      nav_button_prev:                 self
        .get("classnames.prev")
        .unwrap_or(defaults.nav_button_prev),
      nav_button_next:                 self
        .get("classnames.next")
        .unwrap_or(defaults.nav_button_next),
      nav_button_interaction_disabled:
        match self.get("classnames.disabled") {
          | Some(value)
            if value.trim().is_empty() =>
          {
            None
          }
          | Some(value) => Some(value),
          | None => {
            defaults
              .nav_button_interaction_disabled
          }
        }
    };

    let label_defaults = Labels::default();
    let labels = Labels {
      previous_month: self
        .get("labels.previous")
        .unwrap_or(
          label_defaults.previous_month
        ),
      next_month:     self
        .get("labels.next")
        .unwrap_or(label_defaults.next_month)
    };

    Ok(NavBarConfig {
      class_names,
      class_name: self
        .get("classname")
        .filter(|v| !v.trim().is_empty()),
      show_previous_button: self
        .get_bool("show.previous")?
        .unwrap_or(true),
      show_next_button: self
        .get_bool("show.next")?
        .unwrap_or(true),
      dir: self
        .get("dir")
        .map(|v| Direction::parse(&v))
        .unwrap_or_default(),
      labels: Rc::new(labels),
      hovered_arrow_class_name: self
        .get("hovered.classname")
        .filter(|v| !v.trim().is_empty())
    })
  }

  pub fn calendar_start(
    &self
  ) -> anyhow::Result<MonthCursor> {
    match self.get("calendar.start") {
      | Some(raw) => {
        MonthCursor::parse(&raw)
          .context(
            "invalid calendar.start"
          )
      }
      | None => Ok(MonthCursor::current())
    }
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    self
      .loaded_files
      .push(path.clone());
    self
      .include_chain
      .push(canonical_path(&path));

    let result = if path
      .extension()
      .is_some_and(|ext| ext == "toml")
    {
      self.load_toml(&path, &text)
    } else {
      self.load_rc(&path, &text)
    };

    self.include_chain.pop();
    result
  }

  fn load_rc(
    &mut self,
    path: &Path,
    text: &str
  ) -> anyhow::Result<()> {
    let base_dir = path
      .parent()
      .map(|p| p.to_path_buf())
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if line.is_empty()
        || line.starts_with('#')
      {
        continue;
      }

      line = strip_inline_comment(line);

      if line.is_empty() {
        continue;
      }

      if let Some(include_rest) =
        line.strip_prefix("include ")
      {
        let include_path =
          resolve_include_path(
            &base_dir,
            include_rest.trim()
          )?;
        debug!(
            file = %path.display(),
            include = %include_path.display(),
            line = line_num + 1,
            "processing include"
        );

        if include_path.exists() {
          if self.include_chain.contains(
            &canonical_path(&include_path)
          ) {
            return Err(anyhow!(
              "include cycle at {}:{}: {}",
              path.display(),
              line_num + 1,
              include_path.display()
            ));
          }
          self
            .load_file(&include_path)?;
        } else {
          warn!(include = %include_path.display(), "include file does not exist; skipping");
        }
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    Ok(())
  }

  fn load_toml(
    &mut self,
    path: &Path,
    text: &str
  ) -> anyhow::Result<()> {
    let table: toml::Table =
      toml::from_str(text).with_context(
        || {
          format!(
            "failed to parse {}",
            path.display()
          )
        }
      )?;
    flatten_toml("", &table, &mut self.map);
    Ok(())
  }
}

fn flatten_toml(
  prefix: &str,
  table: &toml::Table,
  out: &mut BTreeMap<String, String>
) {
  for (key, value) in table {
    let full = if prefix.is_empty() {
      key.clone()
    } else {
      format!("{prefix}.{key}")
    };
    match value {
      | toml::Value::Table(nested) => {
        flatten_toml(&full, nested, out)
      }
      | toml::Value::String(s) => {
        trace!(key = %full, value = %s, "loaded toml key");
        out.insert(full, s.clone());
      }
      | other => {
        trace!(key = %full, value = %other, "loaded toml key");
        out.insert(full, other.to_string());
      }
    }
  }
}

#[tracing::instrument(skip(
  override_path
))]
fn resolve_rc_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(rc_env) =
    std::env::var(RC_ENV)
  {
    if rc_env == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(rc_env)));
  }

  let Some(home) = dirs::home_dir() else {
    warn!(
      "cannot determine home \
       directory; skipping navbarrc"
    );
    return Ok(None);
  };
  let candidate = home.join(RC_FILE_NAME);
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn resolve_include_path(
  base_dir: &Path,
  include: &str
) -> anyhow::Result<PathBuf> {
  if include.trim().is_empty() {
    return Err(anyhow!(
      "include path cannot be empty"
    ));
  }

  let raw = PathBuf::from(include);
  let expanded = expand_tilde(&raw);
  if expanded.is_absolute() {
    Ok(expanded)
  } else {
    Ok(base_dir.join(expanded))
  }
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> Option<bool> {
  match s
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "1" | "y" | "yes" | "on" | "true" => {
      Some(true)
    }
    | "0" | "n" | "no" | "off"
    | "false" => Some(false),
    | _ => None
  }
}

fn canonical_path(path: &Path) -> PathBuf {
  fs::canonicalize(path)
    .unwrap_or_else(|_| path.to_path_buf())
}

/// A trailing comment is a `#` with
/// whitespace on both sides (or at the
/// end of the line). `Week #2` and
/// `a#b` stay values.
fn strip_inline_comment(
  line: &str
) -> &str {
  let mut prev_ws = false;
  let mut chars =
    line.char_indices().peekable();
  while let Some((idx, ch)) = chars.next()
  {
    if ch == '#'
      && prev_ws
      && chars
        .peek()
        .is_none_or(|(_, next)| {
          next.is_whitespace()
        })
    {
      return line[..idx].trim_end();
    }
    prev_ws = ch.is_whitespace();
  }
  line
}
