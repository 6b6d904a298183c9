use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page centered">
			<h1>"Lost in space"</h1>
			<p>"There is nothing at this address."</p>
			<A href="/">"Back to the galaxy"</A>
		</div>
	}
}
