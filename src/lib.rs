//! Plan-et Rendezvous: a Leptos client for browsing date ideas as a 3D graph.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod api;
pub mod config;
pub mod error;
pub mod graph;
pub mod profile_model;
pub mod recommend;
pub mod session;

// Modules
mod components;
mod pages;
#[cfg(test)]
mod testing;

use crate::api::{HttpApi, UserId};
use crate::config::ApiConfig;
use crate::session::Session;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// App shell: owns the session and routes between landing, registration and
/// profile pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let api = HttpApi::new(ApiConfig::load());
	info!("Using API at {}", api.config().base());

	let session = RwSignal::new(Session::Unauthenticated);
	let on_register = Callback::new(move |id: UserId| session.set(Session::Authenticated(id)));

	let register_api = api.clone();
	let profile_api = api;

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Plan-et Rendezvous" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route
					path=path!("/register")
					view=move || view! { <RegisterPage api=register_api.clone() on_register=on_register /> }
				/>
				<Route
					path=path!("/profile")
					view=move || match session.get().user_id() {
						Some(user_id) => {
							view! { <ProfilePage api=profile_api.clone() user_id=user_id /> }.into_any()
						}
						None => {
							view! {
								<div class="page centered">
									<p>"Please register or log in."</p>
									<A href="/register">"Create an Account"</A>
								</div>
							}
								.into_any()
						}
					}
				/>
			</Routes>
		</Router>
	}
}
