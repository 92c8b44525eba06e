use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
  html! {
      <main class="status">
          <h1>{ "Page not found" }</h1>
          <Link<Route> to={Route::Home}>{ "Back to the map" }</Link<Route>>
      </main>
  }
}
