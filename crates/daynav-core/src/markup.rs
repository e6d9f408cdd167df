use crate::hover::ArrowTag;
use crate::layout::{
  ButtonDescriptor,
  Layout
};

/// Static HTML for a resolved layout,
/// buttons in document order. Handlers
/// are not representable here; an
/// interactive button is marked with
/// `data-interactive="true"` instead.
pub fn render_html(
  layout: &Layout
) -> String {
  let mut out = format!(
    "<div class=\"{}\" dir=\"{}\">",
    escape_attr(&layout.container_class),
    layout.dir
  );
  for button in layout.render_order() {
    out.push_str(&render_button(button));
  }
  out.push_str("</div>");
  out
}

fn render_button(
  button: &ButtonDescriptor
) -> String {
  format!(
    "<span tabindex=\"{}\" role=\"{}\" \
     aria-label=\"{}\" class=\"{}\" \
     {}=\"{}\" \
     data-interactive=\"{}\"></span>",
    button.tab_index,
    button.role,
    escape_attr(&button.label),
    escape_attr(&button.class),
    ArrowTag::ATTRIBUTE,
    button.tag,
    button.interactive
  )
}

fn escape_attr(raw: &str) -> String {
  let mut out =
    String::with_capacity(raw.len());
  for ch in raw.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#39;"),
      | other => out.push(other)
    }
  }
  out
}
