fn main() {
    yew::Renderer::<spotlike_ui::App>::new().render();
}
