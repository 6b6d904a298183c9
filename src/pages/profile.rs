use leptos::callback::UnsyncCallback;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{Category, HttpApi, NewActivity, UserId};
use crate::components::graph3d::Graph3DCanvas;
use crate::graph::{GraphData, GraphNode, category_color, layout_rng};
use crate::profile_model::{ProfileModel, RecommendationStatus, fetch_activities, submit_activity};
use crate::recommend::request_recommendations;

#[component]
pub fn ProfilePage(api: HttpApi, user_id: UserId) -> impl IntoView {
	let model = RwSignal::new(ProfileModel::default());

	{
		let api = api.clone();
		spawn_local(async move {
			match fetch_activities(&api, user_id).await {
				Ok(list) => model.update(|m| m.load_activities(list, &mut layout_rng())),
				Err(e) => model.update(|m| m.fail_activities(&e)),
			}
		});
	}

	let graph: Memo<GraphData> = Memo::new(move |_| model.with(|m| m.graph().clone()));

	let on_node_click = {
		let api = api.clone();
		UnsyncCallback::new(move |node: GraphNode| {
			let Some(ticket) = model.try_update(|m| m.begin_recommendation(&node)) else {
				return;
			};
			let api = api.clone();
			spawn_local(async move {
				let result = request_recommendations(&api, user_id, node.id).await;
				model.update(|m| {
					m.apply_recommendation(ticket, result);
				});
			});
		})
	};

	view! {
		<div class="page profile">
			<h2>"Your Date Ideas"</h2>
			<Notice model=model />
			<div class="scene">
				<Graph3DCanvas data=graph camera_distance=12.0 height=Some(520.0) on_node_click=on_node_click />
			</div>
			{move || {
				let empty = model.with(|m| m.is_loaded() && m.activities().is_empty());
				empty.then(|| view! { <p class="hint">"No date ideas yet. Add one below!"</p> })
			}}
			<Legend />
			<RecommendationPanel model=model />
			<AddActivityForm api=api user_id=user_id model=model />
		</div>
	}
}

#[component]
fn Notice(model: RwSignal<ProfileModel>) -> impl IntoView {
	move || {
		model.with(|m| m.notice().map(str::to_string)).map(|msg| {
			view! {
				<p class="error">
					{msg} " "
					<button on:click=move |_| model.update(|m| m.dismiss_notice())>"Dismiss"</button>
				</p>
			}
		})
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<ul class="legend">
			{Category::ALL
				.into_iter()
				.map(|c| {
					let style = format!("color: {}", category_color(c));
					view! { <li style=style>"● " {c.as_str()}</li> }
				})
				.collect_view()}
		</ul>
	}
}

#[component]
fn RecommendationPanel(model: RwSignal<ProfileModel>) -> impl IntoView {
	move || {
		let selection = model.with(|m| m.selection().cloned())?;
		let body = match selection.status {
			RecommendationStatus::Loading => view! { <p>"Looking for similar ideas..."</p> }.into_any(),
			RecommendationStatus::Failed => view! { <p>"No recommendations available."</p> }.into_any(),
			RecommendationStatus::Ready(recs) if recs.is_empty() => {
				view! { <p>"Nothing similar yet."</p> }.into_any()
			}
			RecommendationStatus::Ready(recs) => view! {
				<ol>
					{recs
						.into_iter()
						.map(|r| {
							view! {
								<li>
									{r.activity.name} " "
									<span class="similarity">{format!("{:.0}%", r.similarity * 100.0)}</span>
								</li>
							}
						})
						.collect_view()}
				</ol>
			}
			.into_any(),
		};
		Some(view! {
			<section class="recommendations">
				<h3>{format!("Recommendations for {}", selection.label)}</h3>
				{body}
				<button on:click=move |_| model.update(|m| m.clear_selection())>"Close"</button>
			</section>
		})
	}
}

#[component]
fn AddActivityForm(api: HttpApi, user_id: UserId, model: RwSignal<ProfileModel>) -> impl IntoView {
	let (name, set_name) = signal(String::new());
	let (category, set_category) = signal(Category::Other);
	let (description, set_description) = signal(String::new());
	let (pending, set_pending) = signal(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if pending.get_untracked() {
			return;
		}
		let api = api.clone();
		let activity = NewActivity {
			name: name.get_untracked(),
			category: category.get_untracked(),
			description: description.get_untracked(),
			..Default::default()
		};
		set_pending.set(true);
		spawn_local(async move {
			match submit_activity(&api, user_id, activity).await {
				Ok(list) => {
					model.update(|m| m.load_activities(list, &mut layout_rng()));
					set_name.set(String::new());
					set_description.set(String::new());
				}
				Err(e) => model.update(|m| m.set_notice(e.to_string())),
			}
			set_pending.set(false);
		});
	};

	view! {
		<form class="add-activity" on:submit=on_submit>
			<h3>"Add a date idea"</h3>
			<input
				type="text"
				placeholder="Name"
				prop:value=name
				on:input=move |ev| set_name.set(event_target_value(&ev))
			/>
			<select on:change=move |ev| set_category.set(Category::from(event_target_value(&ev).as_str()))>
				{Category::ALL
					.into_iter()
					.map(|c| {
						view! {
							<option value=c.as_str() selected=move || category.get() == c>
								{c.as_str()}
							</option>
						}
					})
					.collect_view()}
			</select>
			<input
				type="text"
				placeholder="Description"
				prop:value=description
				on:input=move |ev| set_description.set(event_target_value(&ev))
			/>
			<button type="submit" disabled=pending>"Add"</button>
		</form>
	}
}
