// web_app/model/particles.rs - Particle background settings
//
// Serialized as-is and handed to the particles.js library, so field names
// follow that library's option names.

use serde::Serialize;

/// Element id the particle canvas is mounted into
pub const PARTICLES_ELEMENT_ID: &str = "particles-js";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particles {
    pub number: ParticleNumber,
    pub color: ColorValue,
    pub shape: Shape,
    pub opacity: Opacity,
    pub size: Size,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleNumber {
    pub value: u32,
    pub density: Density,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Opacity {
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Size {
    pub value: f64,
    pub random: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: String,
    pub opacity: f64,
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: f64,
    pub out_mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interactivity {
    pub detect_on: String,
    pub events: InteractivityEvents,
    pub modes: InteractivityModes,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractivityEvents {
    pub onhover: HoverEvent,
    pub onclick: ClickEvent,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverEvent {
    pub enable: bool,
    pub mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickEvent {
    pub enable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractivityModes {
    pub grab: GrabMode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrabMode {
    pub distance: u32,
    pub line_linked: GrabLineLinked,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrabLineLinked {
    pub opacity: f64,
}

impl Default for ParticleConfig {
    /// White linked particles drifting over the hero, grabbed on hover
    fn default() -> Self {
        ParticleConfig {
            particles: Particles {
                number: ParticleNumber {
                    value: 80,
                    density: Density { enable: true, value_area: 900 },
                },
                color: ColorValue { value: "#ffffff".to_string() },
                shape: Shape { kind: "circle".to_string() },
                opacity: Opacity { value: 0.45 },
                size: Size { value: 3.0, random: true },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: "#ffffff".to_string(),
                    opacity: 0.35,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: 2.0,
                    out_mode: "out".to_string(),
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas".to_string(),
                events: InteractivityEvents {
                    onhover: HoverEvent { enable: true, mode: "grab".to_string() },
                    onclick: ClickEvent { enable: false },
                    resize: true,
                },
                modes: InteractivityModes {
                    grab: GrabMode {
                        distance: 140,
                        line_linked: GrabLineLinked { opacity: 0.55 },
                    },
                },
            },
            retina_detect: true,
        }
    }
}
