fn main() {
    bas_leptos::start();
}
