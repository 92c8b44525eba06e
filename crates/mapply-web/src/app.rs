use std::rc::Rc;

use mapply_core::config::MapConfig;
use yew::{
  ContextProvider,
  Html,
  Properties,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::components::{
  Content,
  Footer,
  Header,
  NotFound,
  PlaceholderPage
};
use crate::query_client::QueryClient;

const MAP_CONFIG_TOML: &str =
  include_str!("../assets/mapply.toml");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/login")]
  Login,
  #[at("/signup")]
  Signup,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: Rc<MapConfig>
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let client =
    use_state(QueryClient::default);

  html! {
      <ContextProvider<Rc<MapConfig>> context={props.config.clone()}>
          <ContextProvider<QueryClient> context={(*client).clone()}>
              <BrowserRouter>
                  <div class="page">
                      <Header />
                      <Switch<Route> render={switch} />
                  </div>
                  <Footer />
              </BrowserRouter>
          </ContextProvider<QueryClient>>
      </ContextProvider<Rc<MapConfig>>>
  }
}

fn switch(route: Route) -> Html {
  tracing::debug!(?route, "routing");
  match route {
    | Route::Home => html! { <Content /> },
    | Route::Login => {
      html! { <PlaceholderPage title="Login" /> }
    }
    | Route::Signup => {
      html! { <PlaceholderPage title="Sign up" /> }
    }
    | Route::NotFound => {
      html! { <NotFound /> }
    }
  }
}

/// Config is compiled into the bundle;
/// nothing at runtime can change it.
pub fn load_config() -> Rc<MapConfig> {
  Rc::new(MapConfig::load_or_default(
    MAP_CONFIG_TOML
  ))
}

#[cfg(test)]
mod tests {
  use mapply_shared::{
    CLIENT_LOGIN_PATH,
    CLIENT_ROOT_PATH,
    CLIENT_SIGNUP_PATH
  };

  use super::*;

  #[test]
  fn routes_match_shared_client_paths() {
    assert_eq!(
      Route::Home.to_path(),
      CLIENT_ROOT_PATH
    );
    assert_eq!(
      Route::Login.to_path(),
      CLIENT_LOGIN_PATH
    );
    assert_eq!(
      Route::Signup.to_path(),
      CLIENT_SIGNUP_PATH
    );
    assert_eq!(
      Route::not_found_route(),
      Some(Route::NotFound)
    );
  }

  #[test]
  fn bundled_config_is_valid() {
    let cfg =
      MapConfig::from_toml_str(MAP_CONFIG_TOML)
        .expect("bundled config parses");
    assert_eq!(
      cfg.api.events_url(),
      "/api/v1/map/events"
    );
    assert_eq!(cfg.view.zoom, 4);
  }

  #[test]
  fn loaded_config_is_exactly_the_bundled_one()
   {
    let bundled =
      MapConfig::from_toml_str(MAP_CONFIG_TOML)
        .expect("bundled config parses");
    assert_eq!(*load_config(), bundled);
    assert_eq!(
      bundled.marker.placeholder_text,
      mapply_core::config::DEFAULT_PLACEHOLDER_POPUP
    );
    assert_eq!(
      bundled.tiles.attribution,
      mapply_core::config::DEFAULT_TILE_ATTRIBUTION
    );
  }
}
