use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
  pub text:   String,
  #[prop_or_default]
  pub detail: Option<String>
}

#[function_component(StatusBanner)]
pub fn status_banner(
  props: &StatusBannerProps
) -> Html {
  html! {
      <h1 class="status" title={props.detail.clone()}>
          { &props.text }
      </h1>
  }
}
