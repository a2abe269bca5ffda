//! effect-graph: Effect transformation network viewer.
//!
//! Loads a dataset of effects and ingredients embedded in the page, lays the
//! effects out on a circle and draws the transformations between them.
//! Selecting an ingredient fades everything it does not touch.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;

pub use components::effect_graph::{
	ColorPalette, EffectGraph, EffectGraphCanvas, GraphLayout, GraphScene, Highlight,
	HighlightPolicy, RenderGraph, Selection, highlight,
};
pub use config::ViewerConfig;
pub use error::LoadError;

use components::sidebar::IngredientSidebar;

/// Id of the script element holding the dataset document.
pub const GRAPH_DATA_ELEMENT: &str = "graph-data";

/// Id of the optional script element holding [`ViewerConfig`] as JSON.
pub const CONFIG_ELEMENT: &str = "viewer-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("effect-graph: logging initialized");
}

/// Text content of the script element with the given id.
fn element_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Reads the viewer configuration. A missing element means defaults; a
/// malformed one is logged and replaced by defaults.
fn load_config() -> ViewerConfig {
	let Some(json) = element_text(CONFIG_ELEMENT) else {
		return ViewerConfig::default();
	};
	match ViewerConfig::from_json(&json) {
		Ok(config) => config,
		Err(e) => {
			warn!("effect-graph: ignoring malformed viewer config: {}", e);
			ViewerConfig::default()
		}
	}
}

/// Loads the dataset embedded in the page. Any failure is fatal.
fn load_scene(config: &ViewerConfig) -> Result<GraphScene, LoadError> {
	let json = element_text(GRAPH_DATA_ELEMENT)
		.ok_or_else(|| LoadError::MissingElement(GRAPH_DATA_ELEMENT.to_string()))?;
	GraphScene::load(&json, config)
}

/// Sidebar plus canvas for a successfully loaded scene.
#[component]
fn Viewer(scene: Arc<GraphScene>, config: ViewerConfig) -> impl IntoView {
	let (selection, set_selection) = signal(Selection::None);
	let names = scene.ingredient_names();

	view! {
		<div class="viewer">
			<IngredientSidebar
				names=names
				selection=selection
				set_selection=set_selection
				highlight_color=config.highlight_color.clone()
			/>
			<main class="graph-panel">
				<EffectGraphCanvas scene=scene selection=selection style=config.style.clone() />
			</main>
		</div>
	}
}

/// Main application component.
/// Loads the dataset from the DOM and renders the viewer, or the load error.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let body = match load_scene(&config) {
		Ok(scene) => view! { <Viewer scene=Arc::new(scene) config=config /> }.into_any(),
		Err(e) => {
			error!("effect-graph: {}", e);
			view! {
				<div class="load-error">
					<p>{format!("Failed to load graph data: {e}")}</p>
				</div>
			}
			.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Effect Transformation Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="layout-wide">
			<h1>"Effect Transformation Network Viewer"</h1>
			{body}
		</div>
	}
}
