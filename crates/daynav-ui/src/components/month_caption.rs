use daynav_core::calendar::MonthCursor;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MonthCaptionProps {
  pub month: MonthCursor
}

#[function_component(MonthCaption)]
pub fn month_caption(
  props: &MonthCaptionProps
) -> Html {
  html! {
      <div class="DayPicker-Caption" role="heading">
          { props.month.title() }
      </div>
  }
}
