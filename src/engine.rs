use wasm_bindgen::prelude::*;
use crate::config::EngineConfig;
use crate::types::Project;
use crate::inputs::FrameInputs;
use crate::starfield::StarField;
use crate::scene::SceneState;
use crate::projects::{ProjectStore, add_tag, remove_tag};
use crate::storage::{LocalStorageBackend, MemoryBackend, ProjectStorage};
use crate::gate::AccessGate;
use crate::diag;

/// The whole page state behind one wasm handle: the persisted project
/// gallery, the access gate, both background simulations and the static
/// link configuration. The host owns the DOM, the canvas element and the
/// requestAnimationFrame loop; dropping the engine releases everything
/// here, there are no internal timers or listeners.
#[wasm_bindgen]
pub struct ProfileEngine {
    pub(crate) config: EngineConfig,
    pub(crate) store: ProjectStore,
    pub(crate) gate: AccessGate,
    pub(crate) starfield: StarField,
    pub(crate) scene: SceneState,
    pub(crate) draft: Project,
    pub(crate) base_coat_painted: bool,
}

#[wasm_bindgen]
impl ProfileEngine {
    /// `config` may be undefined/null for the built-in defaults, or a plain
    /// object overriding any subset of fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> ProfileEngine {
        console_error_panic_hook::set_once();

        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            match serde_wasm_bindgen::from_value(config) {
                Ok(c) => c,
                Err(e) => {
                    diag::warn(&format!("invalid engine config, using defaults: {e}"));
                    EngineConfig::default()
                }
            }
        };

        let backend: Box<dyn ProjectStorage> = match LocalStorageBackend::open(&config.storage_key) {
            Some(local) => Box::new(local),
            None => {
                diag::warn("local storage unavailable; projects will not survive a reload");
                Box::new(MemoryBackend::new())
            }
        };

        let seed = js_sys::Date::now() as u32;
        ProfileEngine {
            store: ProjectStore::load(backend, &config.seed_projects),
            gate: AccessGate::new(&config.admin_secret),
            starfield: StarField::new(0.0, 0.0, config.star_density, seed),
            scene: SceneState::new(seed.wrapping_add(1)),
            draft: Project::new(""),
            base_coat_painted: false,
            config,
        }
    }

    /// Viewport resized: the drawing surface gets new dimensions and the
    /// particle population is regenerated for the new layout.
    pub fn resize_surface(&mut self, width: f64, height: f64) {
        self.starfield.resize(width, height);
        self.base_coat_painted = false;
    }

    /// One animation frame: advance the starfield and the scene, return the
    /// scene transforms as JSON for the host to apply. Painting the 2D
    /// field is a separate call (`render_starfield`) because only one of
    /// the two backgrounds is mounted at a time.
    pub fn tick(&mut self, inputs: JsValue) -> String {
        let inputs: FrameInputs = match serde_wasm_bindgen::from_value(inputs) {
            Ok(i) => i,
            Err(e) => return format!("{{\"error\": \"invalid frame inputs: {}\"}}", e),
        };
        self.starfield.step();
        let frame = self.scene.advance(&inputs);
        serde_json::to_string(&frame).unwrap_or_else(|_| "{}".to_string())
    }

    /// The ambient particle cloud's fixed point set; fetched once at mount
    /// to build the host-side points geometry.
    pub fn cloud_points_json(&self) -> String {
        serde_json::to_string(&self.scene.cloud.points).unwrap_or_else(|_| "[]".to_string())
    }

    // ---- project gallery ----

    pub fn projects_json(&self) -> String {
        self.store.to_json()
    }

    pub fn add_project(&mut self, project_json: &str) -> String {
        let project: Project = match serde_json::from_str(project_json) {
            Ok(p) => p,
            Err(e) => return error_envelope(&format!("invalid project: {e}")),
        };
        match self.store.add(project, js_sys::Date::now() as u64) {
            Ok(added) => serde_json::json!({ "ok": added }).to_string(),
            Err(e) => error_envelope(&e.to_string()),
        }
    }

    pub fn update_project(&mut self, project_json: &str) -> String {
        let project: Project = match serde_json::from_str(project_json) {
            Ok(p) => p,
            Err(e) => return error_envelope(&format!("invalid project: {e}")),
        };
        match self.store.update(project) {
            Ok(()) => ok_envelope("true"),
            Err(e) => error_envelope(&e.to_string()),
        }
    }

    /// The host shows its confirm dialog first; this runs after the user
    /// accepted it.
    pub fn remove_project(&mut self, id: &str) -> String {
        match self.store.remove(id) {
            Ok(_) => ok_envelope("true"),
            Err(e) => error_envelope(&e.to_string()),
        }
    }

    // ---- editor draft ----

    /// Start editing: an existing record's JSON, or empty for a new one.
    pub fn set_draft(&mut self, project_json: &str) {
        self.draft = serde_json::from_str(project_json).unwrap_or_else(|_| Project::new(""));
    }

    pub fn draft_json(&self) -> String {
        serde_json::to_string(&self.draft).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn draft_add_tag(&mut self, tag: &str) -> bool {
        add_tag(&mut self.draft, tag)
    }

    pub fn draft_remove_tag(&mut self, tag: &str) -> bool {
        remove_tag(&mut self.draft, tag)
    }

    // ---- access gate ----

    pub fn unlock(&mut self, password: &str) -> bool {
        self.gate.unlock(password)
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    /// Empty string when there is no pending error.
    pub fn auth_error(&self) -> String {
        self.gate.error().unwrap_or("").to_string()
    }

    /// The host calls this as the user types, mirroring the old behavior of
    /// clearing the message on input.
    pub fn clear_auth_error(&mut self) {
        self.gate.clear_error();
    }

    // ---- static page configuration ----

    pub fn profile_json(&self) -> String {
        serde_json::to_string(&self.config.profile).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn social_links_json(&self) -> String {
        serde_json::to_string(&self.config.social_links).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn link_buttons_json(&self) -> String {
        serde_json::to_string(&self.config.link_buttons).unwrap_or_else(|_| "[]".to_string())
    }
}

fn ok_envelope(value: &str) -> String {
    format!("{{\"ok\": {value}}}")
}

fn error_envelope(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}
