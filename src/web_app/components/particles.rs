// web_app/components/particles.rs - Animated particle backdrop
//
// Hands the particle settings to the particles.js library loaded by the
// page. Without the library the backdrop stays an empty div.

use leptos::prelude::*;

use crate::web_app::model::PARTICLES_ELEMENT_ID;

#[cfg(feature = "hydrate")]
mod binding {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_name = particlesJS)]
        pub fn particles_js(tag_id: &str, params: JsValue) -> Result<(), JsValue>;
    }
}

/// Start particles.js on the backdrop element
#[cfg(feature = "hydrate")]
fn start_particles() {
    use crate::web_app::model::ParticleConfig;

    let config = match serde_json::to_string(&ParticleConfig::default()) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to encode particle settings: {}", e);
            return;
        }
    };
    let params = match js_sys::JSON::parse(&config) {
        Ok(params) => params,
        Err(e) => {
            log::error!("Failed to parse particle settings: {:?}", e);
            return;
        }
    };

    if let Err(e) = binding::particles_js(PARTICLES_ELEMENT_ID, params) {
        log::warn!("particles.js not loaded: {:?}", e);
    }
}

/// Full-bleed particle layer behind a hero section
#[component]
pub fn ParticleBackground() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || start_particles());
    }

    view! {
        <div id=PARTICLES_ELEMENT_ID class="absolute inset-0 z-0"></div>
    }
}
