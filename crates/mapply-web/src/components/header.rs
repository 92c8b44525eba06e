use mapply_core::shell::BRAND_TITLE;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[function_component(Header)]
pub fn header() -> Html {
  html! {
      <header class="site-header">
          <nav>
              <ul>
                  <li class="brand">
                      <Link<Route> to={Route::Home}>
                          <h1>{ BRAND_TITLE }</h1>
                          <span class="slash-1">{ "/" }</span>
                          <span class="slash-2">{ "/" }</span>
                          <span class="slash-3">{ "/" }</span>
                      </Link<Route>>
                  </li>
                  <li>
                      <ul class="nav-links">
                          <li><Link<Route> to={Route::Login}>{ "Login" }</Link<Route>></li>
                          <li><Link<Route> to={Route::Signup}>{ "Sign up" }</Link<Route>></li>
                      </ul>
                  </li>
              </ul>
          </nav>
      </header>
  }
}
