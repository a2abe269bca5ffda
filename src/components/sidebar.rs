//! Ingredient selector shown beside the graph.

use leptos::prelude::*;
use log::debug;

use super::effect_graph::{NO_SELECTION, Selection};

/// `(value, label)` pairs for the selector: the sentinel, then every name.
fn selector_options(names: Vec<String>) -> Vec<(String, String)> {
	std::iter::once(NO_SELECTION.to_string())
		.chain(names)
		.map(|name| (name.clone(), name))
		.collect()
}

/// Select box listing the "no selection" sentinel followed by every
/// ingredient in load order. Writes the choice into `set_selection`.
#[component]
pub fn IngredientSidebar(
	names: Vec<String>,
	#[prop(into)] selection: Signal<Selection>,
	set_selection: WriteSignal<Selection>,
	#[prop(into)] highlight_color: String,
) -> impl IntoView {
	let on_change = move |ev: web_sys::Event| {
		let choice = event_target_value(&ev);
		debug!("effect-graph: selector changed to {:?}", choice);
		set_selection.set(Selection::from_choice(&choice));
	};

	let caption_style = format!("color: {};", highlight_color);

	view! {
		<aside class="sidebar">
			<h2>"Ingredients"</h2>
			<label for="ingredient-select">"Select an ingredient:"</label>
			<select id="ingredient-select" on:change=on_change>
				{selector_options(names)
					.into_iter()
					.map(|(value, label)| view! { <option value=value>{label}</option> })
					.collect_view()}
			</select>
			<p class="selected-ingredient" style=caption_style>
				{move || selection.get().ingredient().map(str::to_string)}
			</p>
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentinel_comes_first_then_names_in_order() {
		let options = selector_options(vec!["Cuke".into(), "Donut".into(), "Cuke".into()]);
		let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
		assert_eq!(values, ["None", "Cuke", "Donut", "Cuke"]);
		assert!(options.iter().all(|(value, label)| value == label));
	}

	#[test]
	fn every_option_maps_back_to_its_selection() {
		let options = selector_options(vec!["Cuke".into()]);
		assert_eq!(Selection::from_choice(&options[0].0), Selection::None);
		assert_eq!(
			Selection::from_choice(&options[1].0),
			Selection::Ingredient("Cuke".into())
		);
	}

	#[test]
	fn no_ingredients_leaves_only_the_sentinel() {
		assert_eq!(
			selector_options(Vec::new()),
			vec![(NO_SELECTION.to_string(), NO_SELECTION.to_string())]
		);
	}
}
