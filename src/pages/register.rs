use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{HttpApi, UserId};
use crate::session::register;

/// Username form. On success hands the new id to `on_register` and moves to
/// the profile; on failure stays put and shows why.
#[component]
pub fn RegisterPage(api: HttpApi, #[prop(into)] on_register: Callback<UserId>) -> impl IntoView {
	let (username, set_username) = signal(String::new());
	let (error, set_error) = signal(None::<String>);
	let (pending, set_pending) = signal(false);
	let navigate = use_navigate();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if pending.get_untracked() {
			return;
		}
		let (api, navigate) = (api.clone(), navigate.clone());
		let raw = username.get_untracked();
		set_pending.set(true);
		set_error.set(None);
		spawn_local(async move {
			match register(&api, &raw).await {
				Ok(session) => {
					if let Some(id) = session.user_id() {
						on_register.run(id);
						navigate("/profile", Default::default());
					}
				}
				Err(e) => set_error.set(Some(e.to_string())),
			}
			set_pending.set(false);
		});
	};

	view! {
		<div class="page centered">
			<h2>"Create Account"</h2>
			<form on:submit=on_submit>
				<input
					type="text"
					placeholder="Enter username"
					required
					prop:value=username
					on:input=move |ev| set_username.set(event_target_value(&ev))
				/>
				<button type="submit" disabled=pending>
					{move || if pending.get() { "Registering..." } else { "Register" }}
				</button>
			</form>
			{move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
		</div>
	}
}
