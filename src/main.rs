#[cfg(feature = "csr")]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    portfolio_site::init_logging();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // the page only runs in the browser, build it with `trunk serve`
}
