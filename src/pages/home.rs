use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::graph3d::Graph3DCanvas;
use crate::graph::landing::{STAR_COUNT, sample_graph, starfield};
use crate::graph::{GraphNode, layout_rng};

/// Landing page with the decorative starfield graph.
#[component]
pub fn Home() -> impl IntoView {
	let mut rng = layout_rng();
	let graph = RwSignal::new(sample_graph(&mut rng));
	let stars = starfield(&mut rng, STAR_COUNT);
	let (clicked, set_clicked) = signal(None::<String>);

	let on_node_click = UnsyncCallback::new(move |node: GraphNode| {
		set_clicked.set(Some(node.label));
	});

	view! {
		<div class="page landing">
			<h1>"Welcome to Plan-et Rendezvous"</h1>
			<p>"Explore a galaxy of date ideas through an interactive 3D experience."</p>

			<div class="scene">
				<Graph3DCanvas data=graph stars=stars camera_distance=60.0 height=Some(600.0) on_node_click=on_node_click />
			</div>

			{move || {
				clicked
					.get()
					.map(|name| {
						view! {
							<p class="banner" on:click=move |_| set_clicked.set(None)>
								{format!("You clicked on \"{name}\"!")}
							</p>
						}
					})
			}}

			<A href="/register" attr:class="cta">"Create an Account"</A>
		</div>
	}
}
