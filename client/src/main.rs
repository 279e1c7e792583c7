use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        // The app can run without the log facade wired to the console.
        web_sys::console::error_1(&format!("logger init failed: {error}").into());
    }

    leptos::mount::mount_to_body(App);
}
