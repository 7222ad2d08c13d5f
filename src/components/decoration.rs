//! Decoration Component
//!
//! Cosmetic animated graphics on each face of the card. Holds no app state.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Twinkling tree on the list face
    Christmas,
    /// Santa's sleigh on the form face
    Santa,
}

const CHRISTMAS_FRAMES: &[&str] = &["🎄✨ ❄️ ⭐", "🎄⭐ ✨ ❄️", "🎄❄️ ⭐ ✨"];
const SANTA_FRAMES: &[&str] = &["🎅🛷🦌   ", " 🎅🛷🦌  ", "  🎅🛷🦌 ", " 🎅🛷🦌  "];

impl Scene {
    fn frames(self) -> &'static [&'static str] {
        match self {
            Scene::Christmas => CHRISTMAS_FRAMES,
            Scene::Santa => SANTA_FRAMES,
        }
    }

    /// Frame shown at tick `frame`, looping
    pub fn frame(self, frame: usize) -> &'static str {
        let frames = self.frames();
        frames[frame % frames.len()]
    }

    fn class(self) -> &'static str {
        match self {
            Scene::Christmas => "decoration christmas",
            Scene::Santa => "decoration santa",
        }
    }
}

#[component]
pub fn Decoration(scene: Scene) -> impl IntoView {
    let config = expect_context::<Config>();
    let (frame, set_frame) = signal(0usize);

    // The card is never unmounted, so the ticker runs for the page lifetime.
    Interval::new(config.decoration_tick_ms, move || {
        set_frame.update(|f| *f = f.wrapping_add(1));
    })
    .forget();

    view! {
        <div class=scene.class() aria-hidden="true">
            {move || scene.frame(frame.get())}
        </div>
    }
}
