mod components;
mod contact;
mod model;
mod render;
mod state;
mod theme;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
