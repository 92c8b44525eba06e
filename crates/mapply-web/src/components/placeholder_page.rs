use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
  pub title: String
}

/// Link target without page logic behind
/// it.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(
  props: &PlaceholderPageProps
) -> Html {
  html! {
      <main class="status">
          <h1>{ &props.title }</h1>
          <p>{ "This page is not available yet." }</p>
      </main>
  }
}
